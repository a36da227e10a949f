// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod bills_csv_datasource;
        pub(crate) mod commitments_csv_datasource;
        pub(crate) mod payments_csv_datasource;
        pub(crate) mod snapshot_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod iso_timestamp_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod bill;
        pub(crate) mod commitment;
        pub(crate) mod instance;
        pub(crate) mod ledger;
        pub(crate) mod month_anchor;
        pub(crate) mod payment;
        pub(crate) mod recurrence;
    }
    pub(crate) mod logic {
        pub(crate) mod attribution;
        pub(crate) mod bill_resolver;
        pub(crate) mod date_math;
        pub(crate) mod instance_resolver;
        pub(crate) mod schedule;
        pub(crate) mod status;
        mod utils;
        pub(crate) mod visibility;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod due_label_fmt;
    pub(crate) mod period_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from
    // the internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::bill::*;
        pub use crate::domain::entities::commitment::*;
        pub use crate::domain::entities::instance::*;
        pub use crate::domain::entities::ledger::*;
        pub use crate::domain::entities::month_anchor::*;
        pub use crate::domain::entities::payment::*;
        pub use crate::domain::entities::recurrence::*;
    }

    pub mod fmt {
        pub use crate::presentation::due_label_fmt::format_due_date_label;
        pub use crate::presentation::period_fmt::format_billing_period;
        pub use crate::presentation::utils::format_amount;
    }
}
