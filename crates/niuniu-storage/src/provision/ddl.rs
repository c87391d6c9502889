//! DDL rendering from `TableSchema`.

use niuniu_core::schema::TableSchema;
use niuniu_core::types::TableName;

pub fn create_table_sql(table: &TableName, schema: &TableSchema) -> String {
    let columns = schema
        .columns
        .iter()
        .map(|c| format!("  {}", c.definition()))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("CREATE TABLE IF NOT EXISTS {} (\n{}\n);", table.quoted(), columns)
}

/// `CREATE [UNIQUE] INDEX` statements for every indexed column.
pub fn create_index_sql(table: &TableName, schema: &TableSchema) -> Vec<String> {
    schema
        .indexed_columns()
        .filter_map(|column| {
            let suffix = column.index.suffix(column.name)?;
            let unique = match column.index {
                niuniu_core::schema::IndexKind::Unique => "UNIQUE ",
                _ => "",
            };
            Some(format!(
                "CREATE {unique}INDEX IF NOT EXISTS {} ON {}({});",
                table.index_name(&suffix),
                table.quoted(),
                column.name
            ))
        })
        .collect()
}

pub fn create_statements(table: &TableName, schema: &TableSchema) -> Vec<String> {
    let mut statements = vec![create_table_sql(table, schema)];
    statements.extend(create_index_sql(table, schema));
    statements
}
