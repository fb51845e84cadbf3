//! Interactive build-context session.
//!
//! A menu loop over `BuildContextSession`. Edit buffers are opened in the
//! user's editor and flushed back into the session when the editor closes.
//! Action failures are printed and the loop continues; only prompt I/O errors
//! end the session.

use std::path::Path;

use dialoguer::{Confirm, Editor, Input, Select};

use crate::app::api::{self, LocalSession};
use crate::domain::{
    AppError, CleanupOutcome, CleanupPolicy, CleanupReport, TemplateName, TemplateSelection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    EditDockerfile,
    SaveDockerfile,
    ChooseTemplate,
    LoadDockerfile,
    LoadFiles,
    AddFile,
    ShowFile,
    EditFile,
    SaveFile,
    RenameFile,
    RemoveFile,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 12] = [
        MenuAction::EditDockerfile,
        MenuAction::SaveDockerfile,
        MenuAction::ChooseTemplate,
        MenuAction::LoadDockerfile,
        MenuAction::LoadFiles,
        MenuAction::AddFile,
        MenuAction::ShowFile,
        MenuAction::EditFile,
        MenuAction::SaveFile,
        MenuAction::RenameFile,
        MenuAction::RemoveFile,
        MenuAction::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::EditDockerfile => "Edit Dockerfile",
            MenuAction::SaveDockerfile => "Save Dockerfile",
            MenuAction::ChooseTemplate => "Choose template",
            MenuAction::LoadDockerfile => "Load Dockerfile from path",
            MenuAction::LoadFiles => "Load files",
            MenuAction::AddFile => "Add file",
            MenuAction::ShowFile => "Show file",
            MenuAction::EditFile => "Edit selected file",
            MenuAction::SaveFile => "Save selected file",
            MenuAction::RenameFile => "Rename file",
            MenuAction::RemoveFile => "Remove file",
            MenuAction::Quit => "Quit",
        }
    }
}

fn prompt_error(what: &'static str) -> impl Fn(dialoguer::Error) -> AppError {
    move |err| AppError::Validation(format!("Failed to {}: {}", what, err))
}

pub fn run_edit(template: Option<String>) -> Result<(), AppError> {
    let (config, mut session) = api::open_session()?;
    if let Some(template) = template {
        session.select_template(&template)?;
    }
    println!("ℹ️  Saving into {}", session.work_dir().display());

    loop {
        print_status(&session);
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|action| action.label()).collect();
        let selection = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error("select action"))?;

        let action = selection.map_or(MenuAction::Quit, |index| MenuAction::ALL[index]);
        if action == MenuAction::Quit {
            break;
        }
        if let Err(err) = handle(&mut session, action) {
            println!("⚠️  {}", err);
        }
    }

    finish(&session, config.session.cleanup_on_exit)
}

fn print_status(session: &LocalSession) {
    let active = session.active_file().unwrap_or("none");
    println!(
        "\nDockerfile: {} line(s) | files: {} | selected: {}",
        session.dockerfile().lines().count(),
        session.file_names().len(),
        active
    );
}

fn handle(session: &mut LocalSession, action: MenuAction) -> Result<(), AppError> {
    match action {
        MenuAction::EditDockerfile => {
            if let Some(content) = edit_text(session.dockerfile(), ".Dockerfile")? {
                session.set_dockerfile(content);
            }
        }
        MenuAction::SaveDockerfile => {
            let content = session.dockerfile().to_string();
            let path = session.save_dockerfile(&content)?;
            println!("✅ Saved {}", path.display());
        }
        MenuAction::ChooseTemplate => {
            let Some(name) = prompt_template()? else {
                return Ok(());
            };
            session.select_template(name)?;
            println!("✅ Selected '{}'", name);
        }
        MenuAction::LoadDockerfile => {
            let path = prompt_text("Dockerfile path")?;
            session.load_dockerfile_from_path(Path::new(path.trim()))?;
            println!("✅ Loaded Dockerfile from {}", path.trim());
        }
        MenuAction::LoadFiles => {
            let paths = prompt_paths()?;
            let report = session.load_auxiliary_files(&paths);
            for name in &report.loaded {
                println!("✅ Loaded {}", name);
            }
            for (path, err) in &report.failures {
                println!("⚠️  Could not load {}: {}", path.display(), err);
            }
        }
        MenuAction::AddFile => {
            let name = prompt_text("File name")?;
            session.add_file(name.trim())?;
            println!("✅ Added {}", name.trim());
        }
        MenuAction::ShowFile => {
            let Some(name) = prompt_file(session, "Show file")? else {
                return Ok(());
            };
            let content = session.show_file(&name)?;
            println!("--- {} ---\n{}", name, content);
        }
        MenuAction::EditFile => {
            let content = session.active_content().ok_or(AppError::NoActiveFile)?.to_string();
            if let Some(content) = edit_text(&content, ".txt")? {
                session.update_active_content(content)?;
            }
        }
        MenuAction::SaveFile => {
            let content = session.active_content().ok_or(AppError::NoActiveFile)?.to_string();
            let path = session.save_active_file(&content)?;
            println!("✅ Saved {}", path.display());
        }
        MenuAction::RenameFile => {
            let Some(old) = prompt_file(session, "Rename file")? else {
                return Ok(());
            };
            let new = prompt_text("New name")?;
            session.rename_file(&old, new.trim())?;
            println!("✅ Renamed {} to {}", old, new.trim());
        }
        MenuAction::RemoveFile => {
            let Some(name) = prompt_file(session, "Remove file")? else {
                return Ok(());
            };
            let confirmed = Confirm::new()
                .with_prompt(format!("Remove {} from the build context?", name))
                .default(false)
                .interact()
                .map_err(prompt_error("confirm removal"))?;
            if confirmed {
                session.remove_file(&name)?;
                println!("✅ Removed {}", name);
            }
        }
        MenuAction::Quit => {}
    }
    Ok(())
}

fn edit_text(content: &str, extension: &str) -> Result<Option<String>, AppError> {
    let edited = Editor::new()
        .extension(extension)
        .require_save(true)
        .edit(content)
        .map_err(|err| AppError::Validation(format!("Failed to run editor: {}", err)))?;
    if edited.is_none() {
        println!("ℹ️  Unchanged");
    }
    Ok(edited)
}

fn prompt_text(prompt: &str) -> Result<String, AppError> {
    Input::new().with_prompt(prompt).interact_text().map_err(prompt_error("read input"))
}

/// One path per prompt so paths may contain spaces. An empty line ends the list.
fn prompt_paths() -> Result<Vec<String>, AppError> {
    let mut failure = None;
    let lines = std::iter::from_fn(|| {
        match Input::<String>::new()
            .with_prompt("File path (empty to finish)")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Some(line),
            Err(err) => {
                failure = Some(prompt_error("read input")(err));
                None
            }
        }
    });
    let paths = collect_paths(lines);
    failure.map_or(Ok(paths), Err)
}

fn collect_paths(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .take_while(|line| !line.is_empty())
        .collect()
}

fn prompt_template() -> Result<Option<&'static str>, AppError> {
    let mut items: Vec<&'static str> =
        TemplateName::ALL.iter().map(|name| name.display_name()).collect();
    items.push(TemplateSelection::LOAD_EXISTING_NAME);

    let selection = Select::new()
        .with_prompt("Template")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(prompt_error("select template"))?;
    Ok(selection.map(|index| items[index]))
}

fn prompt_file(session: &LocalSession, prompt: &str) -> Result<Option<String>, AppError> {
    let names = session.file_names();
    if names.is_empty() {
        println!("ℹ️  The build context has no files");
        return Ok(None);
    }
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&names)
        .default(0)
        .interact_opt()
        .map_err(prompt_error("select file"))?;
    Ok(selection.map(|index| names[index].to_string()))
}

fn finish(session: &LocalSession, policy: CleanupPolicy) -> Result<(), AppError> {
    if session.persisted_paths().is_empty() {
        return Ok(());
    }
    let clear = match policy {
        CleanupPolicy::Always => true,
        CleanupPolicy::Never => false,
        CleanupPolicy::Ask => Confirm::new()
            .with_prompt("Clear generated files before exiting?")
            .default(false)
            .interact()
            .map_err(prompt_error("confirm cleanup"))?,
    };
    if clear {
        print_cleanup_report(&session.cleanup());
    }
    Ok(())
}

fn print_cleanup_report(report: &CleanupReport) {
    for (path, outcome) in &report.entries {
        match outcome {
            CleanupOutcome::Deleted => println!("🗑️  Deleted {}", path.display()),
            CleanupOutcome::AlreadyAbsent => println!("ℹ️  Already absent: {}", path.display()),
            CleanupOutcome::Failed(reason) => {
                println!("⚠️  Failed to delete {}: {}", path.display(), reason);
            }
        }
    }
}
