// ABOUTME: Renders inventory catalogs as report lines.
// ABOUTME: Pure formatting; writing the lines is left to the output sink.

use crate::catalog::{DeploymentGroup, FunctionRecord, MAX_VERSIONS};
use crate::types::ServiceScope;

pub const SEPARATOR: &str = "-------------";
pub const NO_DEPLOYMENTS: &str = "Couldn't find any existing deployments.";
pub const VERIFY_STAGE: &str = "Please verify that stage and region are correct.";
pub const NO_FUNCTIONS: &str = "No functions found for this service and stage.";

/// Render deployment groups in builder order.
///
/// With no groups, returns exactly the two "nothing found" lines.
pub fn render_deployments(groups: &[DeploymentGroup]) -> Vec<String> {
    if groups.is_empty() {
        return vec![NO_DEPLOYMENTS.to_string(), VERIFY_STAGE.to_string()];
    }

    let mut lines = vec!["Listing deployments:".to_string()];
    for group in groups {
        lines.push(SEPARATOR.to_string());
        lines.push(format!("Timestamp: {}", group.timestamp));
        lines.push(format!("Datetime: {}", group.datetime));
        lines.push("Files:".to_string());
        lines.extend(group.files().map(|file| format!("- {file}")));
    }
    lines
}

/// Render functions with their versions newest first.
pub fn render_functions(records: &[FunctionRecord], scope: &ServiceScope) -> Vec<String> {
    let mut lines = vec![
        format!("Listing functions and their last {MAX_VERSIONS} versions:"),
        SEPARATOR.to_string(),
    ];

    if records.is_empty() {
        lines.push(NO_FUNCTIONS.to_string());
        return lines;
    }

    for record in records {
        let name = display_name(&record.name, scope);
        let versions = record.newest_first().collect::<Vec<_>>().join(", ");
        if versions.is_empty() {
            lines.push(format!("{name}:"));
        } else {
            lines.push(format!("{name}: {versions}"));
        }
    }
    lines
}

/// Strip the first `<service>-` and then the first `<stage>-` from a function name.
pub fn display_name(name: &str, scope: &ServiceScope) -> String {
    let service_prefix = format!("{}-", scope.service);
    let stage_prefix = format!("{}-", scope.stage);
    name.replacen(&service_prefix, "", 1)
        .replacen(&stage_prefix, "", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DeploymentGroup, VersionRecord, group_deployments};
    use crate::types::{ServiceName, Stage};

    fn scope(service: &str, stage: &str) -> ServiceScope {
        ServiceScope::new(ServiceName::new(service).unwrap(), Stage::new(stage).unwrap())
    }

    fn record(name: &str, versions: &[&str]) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            versions: versions
                .iter()
                .map(|v| VersionRecord {
                    version: v.to_string(),
                    function_name: name.to_string(),
                })
                .collect(),
        }
    }

    fn groups(keys: &[&str]) -> Vec<DeploymentGroup> {
        group_deployments("serverless/svc/dev", keys.iter().copied()).unwrap()
    }

    #[test]
    fn empty_deployments_render_two_lines() {
        assert_eq!(render_deployments(&[]), [NO_DEPLOYMENTS, VERIFY_STAGE]);
    }

    #[test]
    fn deployments_render_in_group_order() {
        let lines = render_deployments(&groups(&[
            "serverless/svc/dev/100-2021-01-01/a.zip",
            "serverless/svc/dev/100-2021-01-01/b.json",
            "serverless/svc/dev/200-2021-01-02/c.zip",
        ]));
        assert_eq!(
            lines,
            [
                "Listing deployments:",
                SEPARATOR,
                "Timestamp: 100",
                "Datetime: 2021-01-01",
                "Files:",
                "- a.zip",
                "- b.json",
                SEPARATOR,
                "Timestamp: 200",
                "Datetime: 2021-01-02",
                "Files:",
                "- c.zip",
            ]
        );
    }

    #[test]
    fn display_name_strips_service_and_stage() {
        assert_eq!(display_name("myservice-dev-hello", &scope("myservice", "dev")), "hello");
    }

    #[test]
    fn display_name_strips_first_occurrence_only() {
        assert_eq!(
            display_name("svc-dev-dev-task", &scope("svc", "dev")),
            "dev-task"
        );
    }

    #[test]
    fn display_name_strips_anywhere_in_name() {
        assert_eq!(
            display_name("legacy-svc-dev-hello", &scope("svc", "dev")),
            "legacy-hello"
        );
    }

    #[test]
    fn functions_render_newest_first() {
        let lines = render_functions(
            &[record("myservice-dev-hello", &["$LATEST", "1", "2"])],
            &scope("myservice", "dev"),
        );
        assert_eq!(lines[2], "hello: 2, 1, $LATEST");
    }

    #[test]
    fn function_without_versions_renders_bare_name() {
        let lines = render_functions(&[record("svc-dev-idle", &[])], &scope("svc", "dev"));
        assert_eq!(lines[2], "idle:");
    }

    #[test]
    fn no_functions_renders_informational_line() {
        let lines = render_functions(&[], &scope("svc", "dev"));
        assert_eq!(
            lines,
            [
                "Listing functions and their last 5 versions:",
                SEPARATOR,
                NO_FUNCTIONS
            ]
        );
    }
}
