use crate::config::RunSettings;
use crate::error::Result;
use lmprenum::workflows;
use tracing::info;

pub fn run(settings: &RunSettings) -> Result<()> {
    info!(
        "Renumbering {:?} into {:?} (velocities: {}).",
        &settings.input, &settings.output, settings.renumber.velocity_policy
    );

    let report = workflows::renumber::run(&settings.input, &settings.output, &settings.renumber)?;

    if report.dangling_references > 0 {
        info!(
            "{} bond/angle endpoint(s) referenced missing atoms and were written as 0.",
            report.dangling_references
        );
    }
    if report.dangling_velocities > 0 {
        info!(
            "{} velocity entr(ies) referenced missing atoms and were written as 0.",
            report.dangling_velocities
        );
    }

    Ok(())
}
