use std::io::{self, Write};

use serde::Serialize;

use crate::controllers::data::summaries::{ModelSummary, ScalingSummary};
use crate::controllers::ports::report_presenter::ReportPresenterPort;

/// Pretty-printed JSON, one document per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportPresenter {}

impl JsonReportPresenter {
    fn write_json(value: &impl Serialize, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)
    }
}

impl ReportPresenterPort for JsonReportPresenter {
    fn present_scaling(&self, summary: &ScalingSummary, out: &mut dyn Write) -> io::Result<()> {
        Self::write_json(summary, out)
    }

    fn present_model(&self, summary: &ModelSummary, out: &mut dyn Write) -> io::Result<()> {
        Self::write_json(summary, out)
    }
}
