use std::collections::BTreeMap;

/// Interpolate `${key}` references in a string.
///
/// Values come from the provided map (e.g. `project.version` supplied by the
/// outer build). References with no matching key are left as literal tokens;
/// whether an unresolved placeholder is an error is the caller's decision.
pub fn interpolate(input: &str, vars: &BTreeMap<String, String>) -> String {
    let mut result = input.to_string();
    let mut search_from = 0;
    while let Some(offset) = result[search_from..].find("${") {
        let start = search_from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let end = start + end;
        let key = &result[start + 2..end];
        match vars.get(key) {
            Some(value) => {
                let value = value.clone();
                result.replace_range(start..=end, &value);
                search_from = start + value.len();
            }
            None => {
                search_from = end + 1;
            }
        }
    }
    result
}
