//! Table layout for `template store list`.

use crate::config::ALL_PLATFORMS;
use crate::ui::Table;

use super::platform::check_existing_platform;
use super::template::TemplateInfo;

const BASIC_HEADERS: [&str; 3] = ["NAME", "SOURCE", "DESCRIPTION"];
const VERBOSE_HEADERS: [&str; 5] = ["NAME", "LANGUAGE", "PLATFORM", "SOURCE", "DESCRIPTION"];

/// Render templates as an aligned table framed by one blank line above and below.
///
/// Unless `platform` is [`ALL_PLATFORMS`], only templates built for that
/// platform are listed. An unsupported `platform` does not produce an error:
/// the returned text is the "Currently supported platforms are: ..." message
/// instead of a table, and callers print it like any other output.
pub fn format_templates_output(
    templates: &[TemplateInfo],
    verbose: bool,
    platform: &str,
) -> String {
    if platform != ALL_PLATFORMS {
        if let Err(unsupported) = check_existing_platform(platform) {
            tracing::debug!("Rejecting platform filter: {}", platform);
            return unsupported.to_string();
        }
    }

    let selected = templates
        .iter()
        .filter(|t| platform == ALL_PLATFORMS || t.platform == platform);

    let table = if verbose {
        let mut table = Table::new(&VERBOSE_HEADERS);
        for t in selected {
            table.add_row(&[
                t.name.as_str(),
                t.language.as_str(),
                t.platform.as_str(),
                t.source.as_str(),
                t.description.as_str(),
            ]);
        }
        table
    } else {
        let mut table = Table::new(&BASIC_HEADERS);
        for t in selected {
            table.add_row(&[t.name.as_str(), t.source.as_str(), t.description.as_str()]);
        }
        table
    };

    format!("\n{}\n", table.render())
}
