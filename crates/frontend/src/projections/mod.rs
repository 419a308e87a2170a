pub mod p900_weekly_payroll;
