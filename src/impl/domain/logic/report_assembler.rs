use std::collections::BTreeMap;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    domain::logic::{
        category_classifier::CategoryClassifier, date_grid_builder::DateGridBuilder,
        expense_aggregator::ExpenseAggregator, per_diem_calculator::PerDiemCalculator,
    },
    entities::{
        CellRef, CellStyle, DateWindow, ExpenseRecord, HeaderImage, PerDiemAllowance,
        PopulatedReport, ReportRequest, Worksheet, DATE_ROW, DAY_NAME_ROW,
        EMPLOYEE_DEPARTMENT_CELL, FIRST_DATE_COLUMN, HEADER_IMAGE_ANCHOR, PERIOD_ENDING_CELL,
        PER_DIEM_BREAKFAST_ROW, PER_DIEM_DINNER_ROW, SCHOOL_CELL, TRIP_PURPOSE_CELL,
    },
    errors::ReportAssemblyFailed,
};

/// Writes a `ReportRequest` onto a copy of the template. The template itself
/// is never touched; the copy is only handed out once every step succeeded.
pub(crate) struct ReportAssembler<'a> {
    template: &'a Worksheet,
    header_image: Option<&'a HeaderImage>,
}

impl<'a> ReportAssembler<'a> {
    pub(crate) fn new(template: &'a Worksheet, header_image: Option<&'a HeaderImage>) -> Self {
        Self {
            template,
            header_image,
        }
    }

    pub(crate) fn assemble(&self, request: &ReportRequest) -> Result<PopulatedReport, ServerError> {
        let travel_period = request.travel_period()?;
        let window = DateGridBuilder::new(request.period_ending).build()?;

        info!(
            period_ending = %request.period_ending,
            records = request.expense_records.len(),
            travel = request.travel,
            "assembling expense report"
        );

        let mut staging = self.template.clone();
        if let Some(image) = self.header_image {
            staging.add_image(HEADER_IMAGE_ANCHOR, image.clone());
        }
        Self::write_header(&mut staging, request);
        Self::write_date_headers(&mut staging, &window)?;
        Self::write_expenses(&mut staging, &window, &request.expense_records)?;
        if let Some(period) = travel_period {
            let allowances = PerDiemCalculator::new(period).calculate(&window);
            Self::write_per_diem(&mut staging, &window, &allowances)?;
        }

        Ok(PopulatedReport::new(staging))
    }

    fn write_header(sheet: &mut Worksheet, request: &ReportRequest) {
        let style = CellStyle::CENTERED_WRAP;
        sheet.set_styled(SCHOOL_CELL, request.school.as_str(), style);
        sheet.set_styled(PERIOD_ENDING_CELL, request.period_ending, style);
        sheet.set_styled(TRIP_PURPOSE_CELL, request.trip_purpose.as_str(), style);
        sheet.set_styled(
            EMPLOYEE_DEPARTMENT_CELL,
            request.employee_department.as_str(),
            style,
        );
    }

    fn write_date_headers(sheet: &mut Worksheet, window: &DateWindow) -> Result<(), ServerError> {
        for column in window.columns() {
            let col = Self::column_for(column.position)?;
            sheet.set_styled(
                CellRef::new(DAY_NAME_ROW, col),
                format!("Date\n{}", column.label),
                CellStyle::CENTERED_WRAP,
            );
            sheet.set_styled(
                CellRef::new(DATE_ROW, col),
                column.date,
                CellStyle::CENTERED_WRAP,
            );
        }
        Ok(())
    }

    fn write_expenses(
        sheet: &mut Worksheet,
        window: &DateWindow,
        records: &[ExpenseRecord],
    ) -> Result<(), ServerError> {
        let grouped = ExpenseAggregator::new(window).aggregate(records);
        if grouped.is_empty() {
            debug!("no expense records inside the report window");
            return Ok(());
        }

        // Each cell holds a single amount: a later record for the same
        // (date, category) replaces the earlier one.
        let mut amounts: BTreeMap<CellRef, Decimal> = BTreeMap::new();
        for date in grouped.dates() {
            let position = window.position_of(date).ok_or_else(|| {
                ReportAssemblyFailed::new(&format!("date {date} is not part of the window"))
            })?;
            let col = Self::column_for(position)?;
            for record in grouped.on(date) {
                let row = CategoryClassifier::classify(&record.category).row();
                let at = CellRef::new(row, col);
                if let Some(previous) = amounts.insert(at, record.amount) {
                    debug!(
                        cell = %at,
                        previous = %previous,
                        amount = %record.amount,
                        "duplicate expense for date and category, keeping latest"
                    );
                }
            }
        }

        debug!(
            placed = grouped.placed_count(),
            cells = amounts.len(),
            "writing expense amounts"
        );
        for (at, amount) in amounts {
            sheet.set_value(at, amount);
        }
        Ok(())
    }

    fn write_per_diem(
        sheet: &mut Worksheet,
        window: &DateWindow,
        allowances: &[PerDiemAllowance],
    ) -> Result<(), ServerError> {
        for allowance in allowances {
            let position = window.position_of(allowance.date).ok_or_else(|| {
                ReportAssemblyFailed::new(&format!(
                    "per-diem date {} is not part of the window",
                    allowance.date
                ))
            })?;
            let col = Self::column_for(position)?;
            if let Some(breakfast) = allowance.breakfast {
                sheet.set_value(CellRef::new(PER_DIEM_BREAKFAST_ROW, col), breakfast);
            }
            if let Some(dinner) = allowance.dinner {
                sheet.set_value(CellRef::new(PER_DIEM_DINNER_ROW, col), dinner);
            }
        }
        Ok(())
    }

    fn column_for(position: usize) -> Result<u16, ServerError> {
        u16::try_from(position)
            .ok()
            .and_then(|p| FIRST_DATE_COLUMN.checked_add(p))
            .ok_or_else(|| {
                ReportAssemblyFailed::new(&format!("no report column for position {position}"))
            })
    }
}
