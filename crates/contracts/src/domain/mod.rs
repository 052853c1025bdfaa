pub mod a001_loan_application;
