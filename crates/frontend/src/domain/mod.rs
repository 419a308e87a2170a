pub mod a001_client;
pub mod a002_invoice;
pub mod a003_quotation;
pub mod a004_employee;
pub mod a005_work_week;
pub mod a006_task;
