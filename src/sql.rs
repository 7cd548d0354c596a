//! Builders for the comma-separated fragments that go into prepared
//! statements: column lists, `?` placeholders and `SET` assignments.
//!
//! All builders return an empty string for empty input.

/// `"name type,name type"`
pub fn field_names_and_types_sql<N, T>(field_names_and_types: &[(N, T)]) -> String
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    field_names_and_types
        .iter()
        .map(|(name, data_type)| format!("{} {}", name.as_ref(), data_type.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// `"a,b,c"`
pub fn field_names_sql<I, S>(field_names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    field_names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// `"?,?,?"`
pub fn placeholders_sql(num_placeholders: usize) -> String {
    vec!["?"; num_placeholders].join(",")
}

/// `"?1,?2,?3"`
pub fn numbered_placeholders_sql(num_placeholders: usize) -> String {
    (1..=num_placeholders)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(",")
}

/// `"b = ?2,c = ?3"` for `["a", "b", "c"]` starting at index 1.
///
/// Placeholder numbers are positions in the whole list so the fields
/// before `begin_ix` can be bound to the lower numbers (e.g. in a `WHERE`).
pub fn numbered_set_field_sql<S: AsRef<str>>(field_names: &[S], begin_ix: usize) -> String {
    field_names
        .iter()
        .enumerate()
        .skip(begin_ix)
        .map(|(i, name)| format!("{} = ?{}", name.as_ref(), i + 1))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_and_types() {
        let fields = [("id", "INT"), ("path", "VARCHAR(255)")];
        assert_eq!(field_names_and_types_sql(&fields), "id INT,path VARCHAR(255)");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(field_names_sql(["id", "path", "size"]), "id,path,size");
        assert_eq!(field_names_sql(vec!["id".to_string()]), "id");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders_sql(3), "?,?,?");
        assert_eq!(placeholders_sql(1), "?");
        assert_eq!(numbered_placeholders_sql(3), "?1,?2,?3");
    }

    #[test]
    fn test_numbered_set_field() {
        let fields = ["id", "status", "size"];
        assert_eq!(numbered_set_field_sql(&fields, 1), "status = ?2,size = ?3");
        assert_eq!(numbered_set_field_sql(&fields, 0), "id = ?1,status = ?2,size = ?3");
    }

    #[test]
    fn test_empty_inputs() {
        let no_fields: [(&str, &str); 0] = [];
        assert_eq!(field_names_and_types_sql(&no_fields), "");
        assert_eq!(field_names_sql(Vec::<String>::new()), "");
        assert_eq!(placeholders_sql(0), "");
        assert_eq!(numbered_placeholders_sql(0), "");
        assert_eq!(numbered_set_field_sql(&["id"], 5), "");
    }
}
