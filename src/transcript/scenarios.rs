//! Built-in demo scenarios.
//!
//! These are the transcripts shown by the demo: a looping hero reel and
//! three usage walkthroughs of increasing depth.

use super::{Script, TranscriptLine};

/// A named built-in script.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Identifier used on the command line (`pf-demo play basic`)
    pub id: &'static str,
    /// Whether the scenario replays forever by default
    pub looping: bool,
    pub script: Script,
}

/// Identifiers of all built-in scenarios, in display order.
pub const SCENARIO_IDS: [&str; 4] = ["hero", "basic", "advanced", "workflow"];

/// Build every built-in scenario, in display order.
pub fn builtin_scenarios() -> Vec<Scenario> {
    SCENARIO_IDS.iter().filter_map(|id| find_scenario(id)).collect()
}

/// Look up a built-in scenario by identifier (case-insensitive).
pub fn find_scenario(id: &str) -> Option<Scenario> {
    let scenario = match id.to_ascii_lowercase().as_str() {
        "hero" => Scenario {
            id: "hero",
            looping: true,
            script: hero(),
        },
        "basic" => Scenario {
            id: "basic",
            looping: false,
            script: basic(),
        },
        "advanced" => Scenario {
            id: "advanced",
            looping: false,
            script: advanced(),
        },
        "workflow" => Scenario {
            id: "workflow",
            looping: false,
            script: workflow(),
        },
        _ => return None,
    };
    Some(scenario)
}

fn hero() -> Script {
    Script {
        title: "Path-Fast Demo".to_string(),
        description: "Save a path, open it, list everything".to_string(),
        lines: vec![
            TranscriptLine::command("pf add . project").with_delay(1000),
            TranscriptLine::success("✅ Path saved: project → /home/user/my-project").with_delay(500),
            TranscriptLine::command("pf go project").with_delay(1500),
            TranscriptLine::success("🚀 Opening project in VS Code...").with_delay(500),
            TranscriptLine::command("pf list").with_delay(1500),
            TranscriptLine::output(
                "📁 Saved projects:\n\
                 ├── project → /home/user/my-project\n\
                 ├── api → /home/user/projects/my-api\n\
                 └── frontend → /home/user/projects/react-app",
            )
            .with_delay(800),
        ],
    }
}

fn basic() -> Script {
    Script {
        title: "Basic Usage".to_string(),
        description: "Essential commands to get started with Path-Fast".to_string(),
        lines: vec![
            TranscriptLine::command("pf add . my-project").with_delay(500),
            TranscriptLine::success("✅ Path saved: my-project → /home/user/workspace/my-project")
                .with_delay(800),
            TranscriptLine::command("pf list").with_delay(1200),
            TranscriptLine::output(
                "📁 Saved projects:\n└── my-project → /home/user/workspace/my-project",
            )
            .with_delay(600),
            TranscriptLine::command("pf go my-project").with_delay(1000),
            TranscriptLine::success("🚀 Opening my-project in VS Code...").with_delay(500),
        ],
    }
}

fn advanced() -> Script {
    Script {
        title: "Advanced Features".to_string(),
        description: "Extra commands and advanced functionality".to_string(),
        lines: vec![
            TranscriptLine::command("pf add . api --cmd \"npm run dev\"").with_delay(600),
            TranscriptLine::success("✅ Project saved with an extra command").with_delay(800),
            TranscriptLine::command("pf go api").with_delay(1000),
            TranscriptLine::success("🚀 Opening api in VS Code...").with_delay(500),
            TranscriptLine::output("⚡ Running: npm run dev").with_delay(800),
            TranscriptLine::success("🔥 Server started on port 3000!").with_delay(600),
        ],
    }
}

fn workflow() -> Script {
    Script {
        title: "Daily Workflow".to_string(),
        description: "How it fits into day-to-day development".to_string(),
        lines: vec![
            TranscriptLine::command("pf add /home/user/projects/frontend frontend").with_delay(500),
            TranscriptLine::success("✅ Path saved: frontend").with_delay(600),
            TranscriptLine::command("pf add /home/user/projects/backend api").with_delay(800),
            TranscriptLine::success("✅ Path saved: api").with_delay(600),
            TranscriptLine::command("pf list").with_delay(1000),
            TranscriptLine::output(
                "📁 Saved projects:\n\
                 ├── frontend → /home/user/projects/frontend\n\
                 ├── api → /home/user/projects/backend\n\
                 └── my-project → /home/user/workspace/my-project",
            )
            .with_delay(800),
            TranscriptLine::command("pf go frontend").with_delay(1200),
            TranscriptLine::success("🚀 Switching to frontend...").with_delay(500),
        ],
    }
}
