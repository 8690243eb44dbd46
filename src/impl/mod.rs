// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod expense_records_csv_datasource;
        pub(crate) mod report_request_json_datasource;
        pub(crate) mod xlsx_document_datasource;
        pub(crate) mod xlsx_template_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod cell_reference_model;
        pub(crate) mod currency_amount_model;
        pub(crate) mod expense_record_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod report_request_model;
        pub(crate) mod travel_flag_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod report_repository_impl;
        pub(crate) mod request_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod date_window;
        pub(crate) mod expense_category;
        pub(crate) mod expense_record;
        pub(crate) mod per_diem_allowance;
        pub(crate) mod report_layout;
        pub(crate) mod report_request;
        pub(crate) mod worksheet;
    }
    pub(crate) mod logic {
        pub(crate) mod category_classifier;
        pub(crate) mod date_grid_builder;
        pub(crate) mod expense_aggregator;
        pub(crate) mod per_diem_calculator;
        pub(crate) mod report_assembler;
    }
    pub(crate) mod repositories {
        pub(crate) mod report_repository;
        pub(crate) mod request_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod assemble_report_usecase;
    }
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::date_window::*;
        pub use crate::domain::entities::expense_category::*;
        pub use crate::domain::entities::expense_record::*;
        pub use crate::domain::entities::per_diem_allowance::*;
        pub use crate::domain::entities::report_layout::*;
        pub use crate::domain::entities::report_request::*;
        pub use crate::domain::entities::worksheet::*;
    }
}
