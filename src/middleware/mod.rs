/*
 * Responsibility
 * - middleware の公開インターフェース
 * - cors::apply(), http::apply() を app.rs から呼ぶ
 */
pub mod cors;
pub mod http;
