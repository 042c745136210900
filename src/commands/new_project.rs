use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::fs;
use std::path::Path;
use std::process::Command;

use super::style;
use super::templates;

/// Resolved scaffold options after CLI flag parsing or interactive prompts.
pub struct ProjectOptions {
    pub name: String,
    pub auth: bool,
    pub upload: bool,
    pub env: bool,
    /// Mongo URI written to `.env`; `None` means the local default derived
    /// from the project name.
    pub mongo_uri: Option<String>,
    pub install: bool,
}

/// Raw CLI flags for `forge new`, before resolution into [`ProjectOptions`].
pub struct CliNewOpts {
    pub auth: bool,
    pub upload: bool,
    pub env: bool,
    pub mongo_uri: Option<String>,
    pub install: bool,
    pub full: bool,
    pub no_interactive: bool,
}

impl CliNewOpts {
    fn has_any_flag(&self) -> bool {
        self.auth || self.upload || self.env || self.mongo_uri.is_some() || self.install
    }
}

/// Create a new backend project.
///
/// Resolves feature toggles from `cli_opts`:
/// - `--full` enables all toggles (auth, upload, env).
/// - `--no-interactive` or any explicit flag uses provided values; the
///   project name must then be passed on the command line.
/// - Otherwise, prompts interactively with `dialoguer`.
///
/// Creates the project directory and all scaffold files (package.json,
/// server.js, config/db.js, the User CRUD module, .env, .gitignore, plus
/// the optional auth and upload modules), then runs `npm install` if
/// requested.
pub fn run(name: Option<&str>, cli_opts: CliNewOpts) -> Result<(), Box<dyn std::error::Error>> {
    let opts = if cli_opts.full {
        ProjectOptions {
            name: required_name(name)?,
            auth: true,
            upload: true,
            env: true,
            mongo_uri: cli_opts.mongo_uri,
            install: cli_opts.install,
        }
    } else if cli_opts.no_interactive || cli_opts.has_any_flag() {
        ProjectOptions {
            name: required_name(name)?,
            auth: cli_opts.auth,
            upload: cli_opts.upload,
            env: cli_opts.env,
            mongo_uri: cli_opts.mongo_uri,
            install: cli_opts.install,
        }
    } else {
        prompt_options(name)?
    };

    generate_project(&opts)?;

    if opts.install {
        npm_install(Path::new(&opts.name))?;
    }

    style::show_success(&opts.name);
    Ok(())
}

fn required_name(name: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    let name = name.ok_or("Project name is required when prompts are skipped")?;
    if name.trim().is_empty() {
        return Err("Project name cannot be empty.".into());
    }
    Ok(name.to_string())
}

fn prompt_options(name: Option<&str>) -> Result<ProjectOptions, Box<dyn std::error::Error>> {
    style::show_banner();

    let name = match name {
        Some(n) => required_name(Some(n))?,
        None => Input::new()
            .with_prompt("Project name".cyan().to_string())
            .default("my-backend".to_string())
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Project name cannot be empty.")
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    let auth = Confirm::new()
        .with_prompt("Include Authentication (JWT login/register)?".cyan().to_string())
        .default(true)
        .interact()?;

    let upload = Confirm::new()
        .with_prompt("Enable File Upload feature (Multer)?".cyan().to_string())
        .default(false)
        .interact()?;

    let env = Confirm::new()
        .with_prompt("Use .env for Mongo URI and configuration?".cyan().to_string())
        .default(true)
        .interact()?;

    let install = Confirm::new()
        .with_prompt("Run npm install after scaffolding?".cyan().to_string())
        .default(false)
        .interact()?;

    Ok(ProjectOptions {
        name,
        auth,
        upload,
        env,
        mongo_uri: None,
        install,
    })
}

const FOLDERS: &[&str] = &[
    "models",
    "routes",
    "controllers",
    "config",
    "middlewares",
    "utils",
    "uploads",
];

/// Write the complete scaffold for `opts` under `<cwd>/<name>`.
///
/// Fails before touching the filesystem when the target directory already
/// exists. Any later write failure propagates as-is; partially written
/// scaffolds are not cleaned up.
pub fn generate_project(opts: &ProjectOptions) -> Result<(), Box<dyn std::error::Error>> {
    let project_dir = Path::new(&opts.name);
    if project_dir.exists() {
        return Err(format!("Directory '{}' already exists", opts.name).into());
    }

    style::step("Creating folder structure...");

    fs::create_dir(project_dir)?;
    for folder in FOLDERS {
        fs::create_dir(project_dir.join(folder))?;
    }
    style::info("Folders ready.");

    fs::write(
        project_dir.join("package.json"),
        templates::project::package_json(opts)?,
    )?;
    style::info("package.json created.");

    fs::write(project_dir.join("config/db.js"), templates::project::db_js())?;

    fs::write(
        project_dir.join("server.js"),
        templates::project::server_js(opts),
    )?;

    if opts.env {
        fs::write(project_dir.join(".env"), templates::project::env_file(opts))?;
    }

    fs::write(project_dir.join(".gitignore"), templates::project::gitignore())?;

    // User CRUD module
    fs::write(
        project_dir.join("models/User.js"),
        templates::project::user_model(),
    )?;
    fs::write(
        project_dir.join("controllers/userController.js"),
        templates::project::user_controller(),
    )?;
    fs::write(
        project_dir.join("routes/userRoutes.js"),
        templates::project::user_routes(),
    )?;

    if opts.auth {
        fs::write(
            project_dir.join("controllers/authController.js"),
            templates::project::auth_controller(),
        )?;
        fs::write(
            project_dir.join("routes/authRoutes.js"),
            templates::project::auth_routes(),
        )?;
    }

    if opts.upload {
        fs::write(
            project_dir.join("routes/uploadRoutes.js"),
            templates::project::upload_routes(),
        )?;
    }

    Ok(())
}

/// Run `npm install` in the freshly scaffolded project, streaming its
/// output. Blocks until npm exits; a non-zero exit is a fatal error.
fn npm_install(project_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("{} Installing dependencies with npm...", "->".blue());

    let status = Command::new("npm")
        .arg("install")
        .current_dir(project_dir)
        .status()?;

    if !status.success() {
        return Err("npm install exited with error".into());
    }

    Ok(())
}
