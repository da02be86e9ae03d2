use lockedin_core::SchemaMigrator;
use serde_json::json;

use super::{CliResult, Context};

pub fn run(ctx: &Context, status: bool) -> CliResult {
    let migrator = SchemaMigrator::new();

    if status {
        let store = ctx.open_unmigrated()?;
        let current = SchemaMigrator::current_version(&store)?;
        let pending: Vec<_> = migrator
            .pending(&store)?
            .into_iter()
            .map(|m| json!({ "version": m.version, "description": m.description }))
            .collect();
        let report = json!({
            "current_version": current,
            "latest_version": migrator.latest_version(),
            "pending": pending,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut store = ctx.open_unmigrated()?;
    let version = migrator.run(&mut store)?;
    println!("schema at version {version}");
    Ok(())
}
