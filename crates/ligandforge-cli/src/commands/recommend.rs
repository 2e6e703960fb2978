use crate::cli::RecommendArgs;
use crate::commands::{emit_report, load_knowledge_base};
use crate::error::{CliError, Result};
use ligandforge::core::models::catalyst::CostTier;
use ligandforge::core::models::constraints::Constraints;
use ligandforge::workflows::recommend::{self, RecommendRequest};
use std::path::PathBuf;
use tracing::info;

pub fn run(args: RecommendArgs, database: &Option<PathBuf>) -> Result<()> {
    let kb = load_knowledge_base(database)?;

    let max_cost = args
        .max_cost
        .as_deref()
        .map(|raw| {
            raw.parse::<CostTier>()
                .map_err(|()| CliError::Argument(format!("unknown cost tier '{}'", raw)))
        })
        .transpose()?;

    let request = RecommendRequest {
        reaction: args.reaction,
        substrate: args.substrate,
        constraints: Constraints {
            prefer_metal: args.prefer_metal,
            max_cost,
            prefer_earth_abundant: args.earth_abundant.then_some(true),
        },
        enantioselective: args.enantioselective,
    };

    let recommendation = recommend::run(&kb, &request);
    info!(
        matches = recommendation.total_matches,
        "recommendation complete"
    );

    emit_report(&recommendation, &args.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(reaction: &str) -> RecommendArgs {
        RecommendArgs {
            reaction: reaction.to_string(),
            substrate: None,
            prefer_metal: None,
            max_cost: None,
            earth_abundant: false,
            enantioselective: false,
            output: None,
        }
    }

    #[test]
    fn recommend_writes_a_json_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out.json");
        let mut args = args("suzuki");
        args.output = Some(path.clone());

        run(args, &None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"status\": \"success\""));
        assert!(content.contains("suzuki"));
    }

    #[test]
    fn unknown_cost_tier_is_rejected() {
        let mut args = args("suzuki");
        args.max_cost = Some("free".to_string());

        let result = run(args, &None);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn cost_tier_accepts_kebab_case() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out.json");
        let mut args = args("kumada");
        args.max_cost = Some("very-low".to_string());
        args.earth_abundant = true;
        args.output = Some(path.clone());

        run(args, &None).unwrap();
        assert!(path.exists());
    }
}
