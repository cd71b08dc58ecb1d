//! 列表渲染模块

use common::models::DatabaseRecord;

/// 客户端标题
const TITLE: &str = "Adm";

/// Renders the database list: title, "Databases" heading, then one line per
/// record in response order. An empty list renders the headings only.
pub fn render(databases: &[DatabaseRecord]) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str("Databases\n");
    for db in databases {
        out.push_str("  - ");
        out.push_str(&db.name);
        out.push('\n');
    }
    out
}
