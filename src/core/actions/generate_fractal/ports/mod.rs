pub mod row_task;
