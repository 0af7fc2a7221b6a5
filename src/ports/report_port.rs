//! Report export port trait.

use crate::domain::error::EtfSimError;
use crate::domain::report::ComparisonReport;
use crate::domain::selection::InstrumentSelection;
use crate::domain::simulation::SimulationConfig;

/// Port for writing a rendered comparison report.
pub trait ReportPort {
    fn write(
        &self,
        report: &ComparisonReport,
        selection: &InstrumentSelection,
        config: &SimulationConfig,
        output_path: &str,
    ) -> Result<(), EtfSimError>;
}
