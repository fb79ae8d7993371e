use std::io::{self, Write};

use crate::controllers::data::summaries::{ModelSummary, ScalingSummary};

pub trait ReportPresenterPort {
    fn present_scaling(&self, summary: &ScalingSummary, out: &mut dyn Write) -> io::Result<()>;

    fn present_model(&self, summary: &ModelSummary, out: &mut dyn Write) -> io::Result<()>;
}
