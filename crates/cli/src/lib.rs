//! Report generation driver behind the `planner` binary.
//!
//! `route-report` turns a single route into HTML; this layer walks the whole
//! shipped list, picks a filename for each page, writes everything into one
//! output directory, and emits the `index.html` that links the pages
//! together. The binary is a thin argument-parsing shell around
//! [`write_reports`], which keeps the interesting parts testable against a
//! temporary directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use route_content::Route;
use route_report::{Style, page, render_route};

/// Where and how report pages are written.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// Target directory, created if missing.
    pub out_dir: PathBuf,
    /// Color scheme baked into every page.
    pub style: Style,
    /// Also export each route's replay trace as pretty-printed JSON.
    pub emit_json: bool,
}

/// Renders every route into `out_dir` and writes an index page linking them.
///
/// A route whose replay aborts is logged and dropped from the output, so one
/// broken route cannot block the rest; it is also left out of the index.
/// Returns the paths written, index last.
///
/// # Errors
///
/// Fails when two route names collapse to the same filename, or on any
/// filesystem error.
pub fn write_reports(routes: &[Route], options: &ReportOptions) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&options.out_dir)
        .with_context(|| format!("creating {}", options.out_dir.display()))?;

    let mut written = Vec::new();
    let mut claimed = BTreeSet::new();
    let mut index = String::from("<h1>Route Index</h1><ul>");

    for route in routes {
        let filename = route_filename(&route.name);
        if !claimed.insert(filename.clone()) {
            bail!("Multiple routes with the same name: {filename}");
        }

        let body = match render_route(route) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Replay of {} aborted: {}. Page skipped.", route.name, e);
                continue;
            }
        };

        let path = options.out_dir.join(&filename);
        fs::write(&path, page(&body, &route.name, options.style))
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
        index.push_str(&format!(
            "<li><a href=\"{filename}\">{}</a></li>\n",
            route.name
        ));
        written.push(path);

        if options.emit_json {
            written.push(write_trace(route, options, &filename)?);
        }
    }

    index.push_str("</ul>");
    let index_path = options.out_dir.join("index.html");
    fs::write(&index_path, index)
        .with_context(|| format!("writing {}", index_path.display()))?;
    written.push(index_path);
    Ok(written)
}

/// Replays the route once more and writes the trace next to its page.
fn write_trace(route: &Route, options: &ReportOptions, filename: &str) -> Result<PathBuf> {
    let trace = route
        .segment
        .process()
        .with_context(|| format!("replaying {}", route.name))?;
    let stem = filename.strip_suffix(".html").unwrap_or(filename);
    let path = options.out_dir.join(format!("{stem}.json"));
    fs::write(&path, serde_json::to_string_pretty(&trace)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(path)
}

/// A route's page name: the alphanumeric characters of its display name plus
/// `.html`. Spaces, `%`, and punctuation are dropped rather than escaped, so
/// `SL1 Rangeless Hitless (Any%)` lands at `SL1RangelessHitlessAny.html`.
pub fn route_filename(name: &str) -> String {
    let mut filename: String = name.chars().filter(|c| c.is_alphanumeric()).collect();
    filename.push_str(".html");
    filename
}

#[cfg(test)]
mod tests {
    use super::route_filename;

    #[test]
    fn filenames_keep_only_alphanumerics() {
        assert_eq!(
            route_filename("SL1 Rangeless Hitless (Any% with Battle Axe +4)"),
            "SL1RangelessHitlessAnywithBattleAxe4.html"
        );
    }

    #[test]
    fn punctuation_is_dropped_not_escaped() {
        assert_eq!(route_filename("Ornstein & Smough"), "OrnsteinSmough.html");
    }
}
