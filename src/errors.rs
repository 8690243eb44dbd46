use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_internal_error!(WriteError, "Error writing file: {path}.", { path: &str });

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRequestJson, "Invalid report request (invalid JSON format).");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidCurrencyAmount,
    "Invalid currency amount: '{value}'.",
    { value: &str }
);
define_client_error!(
    InvalidCellReference,
    "Invalid cell reference: '{reference}'. Expected A1 notation, e.g. 'B5'.",
    { reference: &str }
);
define_client_error!(InvalidTemplate, "Invalid report template: {details}.", { details: &str });

// Request validation.
define_client_error!(MissingPeriodEnding, "Report request is missing 'periodEnding'.");
define_client_error!(
    MissingTravelDates,
    "Travel is set but 'travelStartDate' and 'travelEndDate' are not both present."
);
define_client_error!(
    InvertedTravelRange,
    "Travel start date ({start}) is after travel end date ({end}).",
    { start: &NaiveDate, end: &NaiveDate }
);
define_client_error!(
    DateWindowOutOfRange,
    "Cannot build a 7-day window ending on {period_ending}.",
    { period_ending: &NaiveDate }
);

// Assembly / serialization.
define_internal_error!(
    ReportAssemblyFailed,
    "Error assembling expense report: {details}.",
    { details: &str }
);
define_internal_error!(
    XlsxSerializationFailed,
    "Error serializing expense report to XLSX: {details}.",
    { details: &str }
);
define_client_error!(
    InvalidDestination,
    "Invalid report destination: '{destination}'. Expected a relative file path.",
    { destination: &str }
);
