pub mod a001_loan_application;
pub mod a002_company_info;
