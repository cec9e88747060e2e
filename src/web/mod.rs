//! HTML 页面渲染
//!
//! Browse-only pages: the cafe index and the per-cafe detail page.

pub mod pages;
