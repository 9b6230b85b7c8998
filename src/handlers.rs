use crate::achievements;
use crate::calendar::{self, CalendarMode};
use crate::errors::AppError;
use crate::models::{
    AddTaskRequest, CalendarDay, CalendarQuery, CalendarResponse, DailySummary,
    DeleteTaskResponse, InitialData, OrderRequest, SummaryQuery, Task, ToggleLogRequest,
    ToggleLogResponse, UpdateTaskRequest,
};
use crate::order::TaskOrder;
use crate::state::AppState;
use crate::storage;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use chrono::{Local, NaiveDate};

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn get_initial(State(state): State<AppState>) -> Json<InitialData> {
    let (tasks, logs) = state.engine.snapshot().await;
    let order = state.order.lock().await;
    Json(InitialData {
        tasks: order.apply(&tasks),
        logs,
    })
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<Task>, AppError> {
    let task = state.engine.add_task(&payload.title).await?;
    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    let task = state.engine.update_task(&id, &payload.title).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTaskResponse>, AppError> {
    let deleted = state.engine.delete_task(&id).await?;
    Ok(Json(DeleteTaskResponse { deleted }))
}

pub async fn toggle_log(
    State(state): State<AppState>,
    Json(payload): Json<ToggleLogRequest>,
) -> Result<Json<ToggleLogResponse>, AppError> {
    let date = parse_date(&payload.date)?.to_string();
    state
        .engine
        .toggle_log(&date, &payload.task_id, payload.done)
        .await?;
    Ok(Json(ToggleLogResponse {
        date,
        task_id: payload.task_id,
        done: payload.done,
    }))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<DailySummary>, AppError> {
    let date = parse_date(&query.date)?.to_string();
    let (tasks, logs) = state.engine.snapshot().await;
    let ordered = state.order.lock().await.apply(&tasks);
    Ok(Json(achievements::daily_summary(&ordered, &logs, &date)))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let anchor = match &query.anchor {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let mode = query.mode.unwrap_or(CalendarMode::Monthly);

    let (start, end) = calendar::grid_range(anchor, mode);
    let days = calendar::days_between(start, end).map_err(AppError::internal)?;

    let (tasks, logs) = state.engine.snapshot().await;
    let achieved = achievements::achieved_dates(&tasks, &logs);

    let days = days
        .into_iter()
        .map(|day| {
            let date = day.to_string();
            let achieved = achieved.contains(&date);
            CalendarDay { date, achieved }
        })
        .collect();

    Ok(Json(CalendarResponse {
        start: start.to_string(),
        end: end.to_string(),
        days,
    }))
}

pub async fn put_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderRequest>,
) -> Result<Json<Vec<Task>>, AppError> {
    let new_order = TaskOrder::new(payload.order);
    storage::save_json(&state.order_path, &new_order).await?;

    let mut order = state.order.lock().await;
    *order = new_order;

    let (tasks, _) = state.engine.snapshot().await;
    Ok(Json(order.apply(&tasks)))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("invalid date: {raw}")))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
