//! Cafe API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | HTML 列表页 |
//! | /random | GET | 随机返回一条记录 (JSON) |
//! | /search/{cafe_id} | GET | HTML 详情页 |
//! | /add | POST | 新增记录 |
//! | /update-price/{cafe_id} | PATCH | 更新咖啡价格 |
//! | /report-closed/{cafe_id} | DELETE | 删除记录 (需要 api_key) |

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/random", get(handler::random))
        .route("/search/{cafe_id}", get(handler::get_by_id))
        .route("/add", post(handler::create))
        .route("/update-price/{cafe_id}", patch(handler::update_price))
        .route("/report-closed/{cafe_id}", delete(handler::report_closed))
}
