mod view;
mod view_model;

pub use view::LoanApplicationForm;
pub use view_model::LoanFormViewModel;
