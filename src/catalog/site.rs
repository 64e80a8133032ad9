//! Project information, features, contribution paths, installation steps
//! and code examples.

/// Project metadata.
#[derive(Debug, Clone, Copy)]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub package: &'static str,
    pub license: &'static str,
    pub author: &'static str,
    pub github: &'static str,
    pub npm: &'static str,
    pub issues: &'static str,
    pub discussions: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Path-Fast",
    tagline: "Manage paths and open projects with a single command",
    description: "A modern CLI that saves paths under short aliases, opens them in VS Code \
                  and runs extra commands on arrival.",
    package: "path-fast",
    license: "MIT",
    author: "Eduardo Nicola Possani",
    github: "https://github.com/eduardo-nicola/path-fast",
    npm: "https://www.npmjs.com/package/path-fast",
    issues: "https://github.com/eduardo-nicola/path-fast/issues",
    discussions: "https://github.com/eduardo-nicola/path-fast/discussions",
};

impl SiteInfo {
    /// The license text in the repository.
    pub fn license_url(&self) -> String {
        format!("{}/blob/main/LICENSE", self.github)
    }
}

/// A way to take part in the project.
#[derive(Debug, Clone, Copy)]
pub struct Contribution {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub link: &'static str,
}

pub const CONTRIBUTIONS: [Contribution; 4] = [
    Contribution {
        icon: "🐛",
        title: "Report bugs",
        description: "Found a problem? Help us improve by reporting it.",
        action: "Open an issue",
        link: "https://github.com/eduardo-nicola/path-fast/issues/new?template=bug_report.md",
    },
    Contribution {
        icon: "⭐",
        title: "Suggest features",
        description: "Have an idea? Share your suggestions with us.",
        action: "Suggest a feature",
        link: "https://github.com/eduardo-nicola/path-fast/issues/new?template=feature_request.md",
    },
    Contribution {
        icon: "🍴",
        title: "Contribute code",
        description: "Fork, implement your improvements and open a PR.",
        action: "Fork & PR",
        link: "https://github.com/eduardo-nicola/path-fast",
    },
    Contribution {
        icon: "💬",
        title: "Discussions",
        description: "Join the community discussions and share ideas.",
        action: "Join in",
        link: "https://github.com/eduardo-nicola/path-fast/discussions",
    },
];

/// A product feature with the command that demonstrates it.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub command: &'static str,
}

pub const FEATURES: [Feature; 5] = [
    Feature {
        id: "aliases",
        icon: "🔖",
        title: "Custom aliases",
        description: "Save long paths under short, memorable names.",
        command: "pf add . project",
    },
    Feature {
        id: "quick-open",
        icon: "⚡",
        title: "Quick open",
        description: "Open any project in VS Code from anywhere in the terminal.",
        command: "pf go project",
    },
    Feature {
        id: "extra-commands",
        icon: "🛠️",
        title: "Extra commands",
        description: "Run a command automatically when jumping to a project.",
        command: "pf add . project --cmd 'npm run dev'",
    },
    Feature {
        id: "interactive-edit",
        icon: "✏️",
        title: "Interactive editing",
        description: "Change, remove or inspect aliases from an interactive prompt.",
        command: "pf edit",
    },
    Feature {
        id: "global-install",
        icon: "🌍",
        title: "Global install",
        description: "Install once, use it in every project on the system.",
        command: "pf --version",
    },
];

/// One step of the installation guide.
#[derive(Debug, Clone, Copy)]
pub struct InstallStep {
    pub step: u8,
    pub title: &'static str,
    pub command: &'static str,
    pub description: &'static str,
}

/// Installation guide. The first step's command depends on the selected
/// package manager and is substituted by the views.
pub const INSTALLATION_STEPS: [InstallStep; 3] = [
    InstallStep {
        step: 1,
        title: "Install globally",
        command: "pnpm add -g path-fast",
        description: "Installs Path-Fast globally on your system",
    },
    InstallStep {
        step: 2,
        title: "Add a project",
        command: "pf add . my-project",
        description: "Saves the current directory under an alias",
    },
    InstallStep {
        step: 3,
        title: "Jump to it",
        command: "pf go my-project",
        description: "Opens the project in VS Code from anywhere",
    },
];

/// Named code examples: (id, title, snippet).
pub const CODE_EXAMPLES: [(&str, &str, &str); 3] = [
    (
        "basic",
        "Basic",
        "# Save a project\n\
         pf add . my-project\n\
         \n\
         # Jump to the project\n\
         pf go my-project\n\
         \n\
         # List every project\n\
         pf list",
    ),
    (
        "advanced",
        "Advanced",
        "# Save with an extra command\n\
         pf add . api --cmd \"npm run dev\"\n\
         \n\
         # Save a specific path\n\
         pf add /path/to/project frontend\n\
         \n\
         # Edit aliases interactively\n\
         pf edit\n\
         \n\
         # Remove an alias\n\
         pf remove project",
    ),
    (
        "workflow",
        "Workflow",
        "# Typical development workflow\n\
         pf add . current-project\n\
         pf go api              # Open the API\n\
         pf go frontend         # Open the frontend\n\
         pf go current-project  # Back to the current project",
    ),
];

/// Look up a code example snippet by id.
pub fn code_example(id: &str) -> Option<&'static str> {
    CODE_EXAMPLES
        .iter()
        .find(|(example_id, _, _)| example_id.eq_ignore_ascii_case(id))
        .map(|(_, _, code)| *code)
}

/// Completion state of the installation guide.
///
/// Toggling a step flips it; steps can be completed in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallChecklist {
    completed: Vec<u8>,
}

impl InstallChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a step. Unknown step numbers are ignored.
    pub fn toggle(&mut self, step: u8) {
        if !INSTALLATION_STEPS.iter().any(|s| s.step == step) {
            return;
        }
        if let Some(pos) = self.completed.iter().position(|s| *s == step) {
            self.completed.remove(pos);
        } else {
            self.completed.push(step);
        }
    }

    pub fn is_done(&self, step: u8) -> bool {
        self.completed.contains(&step)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn all_done(&self) -> bool {
        self.completed.len() == INSTALLATION_STEPS.len()
    }
}
