/// One master-list column. `key` matches a declared field name for entity
/// columns; injected columns carry keys of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub title: String,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Total ordering over the list view's columns: columns that do not
/// correspond to declared fields come first (keeping their given order),
/// followed by declared-field columns in declaration order. Pure; safe to
/// re-invoke on an already ordered set.
pub fn order_columns(columns: &[Column], declared: &[String]) -> Vec<Column> {
    let declared_position =
        |column: &Column| declared.iter().position(|name| name == &column.key);

    let injected = columns
        .iter()
        .filter(|column| declared_position(column).is_none())
        .cloned();

    let mut from_entity: Vec<Column> = columns
        .iter()
        .filter(|column| declared_position(column).is_some())
        .cloned()
        .collect();
    from_entity.sort_by_key(|column| declared_position(column));

    injected.chain(from_entity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared() -> Vec<String> {
        vec!["firstName".to_string(), "lastName".to_string(), "email".to_string()]
    }

    #[test]
    fn injected_columns_come_first_then_declaration_order() {
        let columns = vec![
            Column::new("email", "Email"),
            Column::new("actions", "Actions"),
            Column::new("firstName", "First name"),
            Column::new("lastName", "Last name"),
        ];
        let ordered = order_columns(&columns, &declared());
        let keys: Vec<&str> = ordered.iter().map(|column| column.key.as_str()).collect();
        assert_eq!(keys, ["actions", "firstName", "lastName", "email"]);
    }

    #[test]
    fn order_is_stable_across_input_permutations() {
        let mut columns = vec![
            Column::new("lastName", "Last name"),
            Column::new("firstName", "First name"),
            Column::new("email", "Email"),
        ];
        let first = order_columns(&columns, &declared());
        columns.reverse();
        let second = order_columns(&columns, &declared());
        assert_eq!(first, second);
    }

    #[test]
    fn reapplying_the_policy_is_a_fixed_point() {
        let columns = vec![
            Column::new("rowNumber", "#"),
            Column::new("firstName", "First name"),
        ];
        let once = order_columns(&columns, &declared());
        let twice = order_columns(&once, &declared());
        assert_eq!(once, twice);
    }
}
