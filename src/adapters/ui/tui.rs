//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Each screen is a prompt loop that returns the next route, or `None` to quit.
//! Esc backs out of the current screen; Ctrl-C ends the program.

use crate::adapters::ui::wheel_view::{animate_spin, progress_bar};
use crate::domain::{DecisionSet, DomainError, EditorTarget, PlaySession, Route};
use crate::ports::{DecisionSetRepo, InputPort};
use crate::usecases::{Draft, EditorService, Navigator, PlayService, Screen};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::{Confirm, InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const PAGE_SIZE: usize = 12;
const BAR_WIDTH: usize = 24;

/// Esc is `None`, Ctrl-C is `Interrupted`.
fn answered<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(InquireError::OperationInterrupted) => Err(DomainError::Interrupted),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn print_error(e: &DomainError) {
    println!("{} {}", "✖".red(), e);
}

fn set_card(set: &DecisionSet) -> String {
    let used = set
        .last_used
        .as_deref()
        .map(|l| format!(" · last used {}", l))
        .unwrap_or_default();
    format!("{}  ({}{})", set.title, set.level_count_label(), used)
}

enum DashboardItem {
    Set { id: String, label: String },
    New,
    Search,
    ClearSearch,
    Demo,
    Quit,
}

impl fmt::Display for DashboardItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { label, .. } => write!(f, "{}", label),
            Self::New => write!(f, "+ New decision set"),
            Self::Search => write!(f, "Search..."),
            Self::ClearSearch => write!(f, "Clear search"),
            Self::Demo => write!(f, "Try the demo"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

#[derive(Clone, Copy)]
enum SetAction {
    Play,
    Edit,
    Delete,
    Back,
}

impl fmt::Display for SetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Play => "Play",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Back => "Back",
        })
    }
}

enum EditorItem {
    Title,
    Description,
    Level { id: String, label: String },
    AddLevel,
    Preview,
    Save,
    Discard,
}

impl fmt::Display for EditorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "Edit title"),
            Self::Description => write!(f, "Edit description"),
            Self::Level { label, .. } => write!(f, "{}", label),
            Self::AddLevel => write!(f, "+ Add level"),
            Self::Preview => write!(f, "Preview"),
            Self::Save => write!(f, "Save"),
            Self::Discard => write!(f, "Discard changes"),
        }
    }
}

enum LevelItem {
    Option { index: usize, text: String },
    Rename,
    AddOption,
    RemoveOption,
    MoveUp,
    MoveDown,
    RemoveLevel,
    Done,
}

impl fmt::Display for LevelItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option { index, text } => write!(f, "{:>2}. {}", index + 1, text),
            Self::Rename => write!(f, "Rename level"),
            Self::AddOption => write!(f, "+ Add option"),
            Self::RemoveOption => write!(f, "Remove an option"),
            Self::MoveUp => write!(f, "Move level up"),
            Self::MoveDown => write!(f, "Move level down"),
            Self::RemoveLevel => write!(f, "Remove level"),
            Self::Done => write!(f, "Done"),
        }
    }
}

/// Where a play screen was opened from.
#[derive(Clone, Copy, PartialEq, Eq)]
enum PlayContext {
    Stored,
    Demo,
    Preview,
}

enum PlayAction {
    Spin,
    SpinAgain,
    Back,
    CreateOwn,
    Quit,
}

impl PlayAction {
    fn label(&self, ctx: PlayContext) -> &'static str {
        match (self, ctx) {
            (Self::Spin, _) => "Spin the wheel",
            (Self::SpinAgain, _) => "Spin Again",
            (Self::Back, PlayContext::Preview) => "Back to Editor",
            (Self::Back, _) => "Back to Dashboard",
            (Self::CreateOwn, _) => "Create Your Own",
            (Self::Quit, _) => "Quit",
        }
    }
}

struct PlayChoice(PlayAction, PlayContext);

impl fmt::Display for PlayChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label(self.1))
    }
}

enum PlayExit {
    Back,
    Navigate(Route),
    Quit,
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    repo: Arc<dyn DecisionSetRepo>,
    navigator: Arc<Navigator>,
    editor: Arc<EditorService>,
    play: Arc<PlayService>,
    frame: Duration,
}

impl TuiInputPort {
    pub fn new(
        repo: Arc<dyn DecisionSetRepo>,
        navigator: Arc<Navigator>,
        editor: Arc<EditorService>,
        play: Arc<PlayService>,
        frame: Duration,
    ) -> Self {
        Self {
            repo,
            navigator,
            editor,
            play,
            frame,
        }
    }

    async fn dashboard(&self) -> Result<Option<Route>, DomainError> {
        let mut query = String::new();
        loop {
            let catalog = self.repo.list().await?;
            let visible = catalog.search(&query);

            println!();
            println!("{}", "Your Decision Sets".bold());
            println!(
                "{}",
                "Create and manage your multi-level decision wheels".dark_grey()
            );
            if catalog.is_empty() {
                println!("No decision sets yet. Create your first decision set to get started!");
            } else if visible.is_empty() {
                println!("No decision sets match \"{}\".", query);
            }

            let mut items: Vec<DashboardItem> = visible
                .iter()
                .map(|s| DashboardItem::Set {
                    id: s.id.clone(),
                    label: set_card(s),
                })
                .collect();
            items.push(DashboardItem::New);
            if query.is_empty() {
                items.push(DashboardItem::Search);
            } else {
                items.push(DashboardItem::ClearSearch);
            }
            items.push(DashboardItem::Demo);
            items.push(DashboardItem::Quit);

            let Some(choice) = answered(
                Select::new("Pick a decision set", items)
                    .with_page_size(PAGE_SIZE)
                    .prompt(),
            )?
            else {
                return Ok(None);
            };

            match choice {
                DashboardItem::Set { id, .. } => {
                    if let Some(route) = self.set_menu(&id).await? {
                        return Ok(Some(route));
                    }
                }
                DashboardItem::New => return Ok(Some(Route::Editor(EditorTarget::New))),
                DashboardItem::Search => {
                    if let Some(q) = answered(Text::new("Search decision sets:").prompt())? {
                        query = q.trim().to_string();
                    }
                }
                DashboardItem::ClearSearch => query.clear(),
                DashboardItem::Demo => return Ok(Some(Route::play_demo())),
                DashboardItem::Quit => return Ok(None),
            }
        }
    }

    /// Play/Edit/Delete for one card. `None` stays on the dashboard.
    async fn set_menu(&self, id: &str) -> Result<Option<Route>, DomainError> {
        let actions = vec![
            SetAction::Play,
            SetAction::Edit,
            SetAction::Delete,
            SetAction::Back,
        ];
        let Some(action) = answered(Select::new("Action", actions).prompt())? else {
            return Ok(None);
        };
        match action {
            SetAction::Play => Ok(Some(Route::Play(id.to_string()))),
            SetAction::Edit => Ok(Some(Route::Editor(EditorTarget::Existing(id.to_string())))),
            SetAction::Delete => {
                let confirmed = answered(
                    Confirm::new("Delete this decision set?")
                        .with_default(false)
                        .prompt(),
                )?
                .unwrap_or(false);
                if confirmed {
                    match self.editor.delete(id).await {
                        Ok(()) => println!("{} Deleted.", "✔".green()),
                        Err(e) => print_error(&e),
                    }
                }
                Ok(None)
            }
            SetAction::Back => Ok(None),
        }
    }

    async fn edit(&self, mut draft: Draft) -> Result<Option<Route>, DomainError> {
        loop {
            print_draft(&draft);

            let mut items = vec![EditorItem::Title, EditorItem::Description];
            items.extend(draft.set.levels.iter().enumerate().map(|(i, l)| {
                EditorItem::Level {
                    id: l.id.clone(),
                    label: format!("{}. {} ({} options)", i + 1, l.name, l.options.len()),
                }
            }));
            items.extend([
                EditorItem::AddLevel,
                EditorItem::Preview,
                EditorItem::Save,
                EditorItem::Discard,
            ]);

            let Some(choice) = answered(
                Select::new(draft.heading(), items)
                    .with_page_size(PAGE_SIZE)
                    .prompt(),
            )?
            else {
                return Ok(Some(Route::Dashboard));
            };

            match choice {
                EditorItem::Title => {
                    if let Some(t) = answered(
                        Text::new("Title:")
                            .with_initial_value(&draft.set.title)
                            .prompt(),
                    )? {
                        draft.set.set_title(t);
                    }
                }
                EditorItem::Description => {
                    if let Some(d) = answered(
                        Text::new("Description:")
                            .with_initial_value(&draft.set.description)
                            .prompt(),
                    )? {
                        draft.set.set_description(d);
                    }
                }
                EditorItem::Level { id, .. } => self.edit_level(&mut draft, &id)?,
                EditorItem::AddLevel => {
                    let id = draft.set.add_level();
                    self.edit_level(&mut draft, &id)?;
                }
                EditorItem::Preview => {
                    if let Err(e) = draft.set.validate() {
                        print_error(&e);
                        continue;
                    }
                    match self.play_screen(&draft.set, PlayContext::Preview).await? {
                        PlayExit::Quit => return Ok(None),
                        PlayExit::Navigate(route) => return Ok(Some(route)),
                        PlayExit::Back => {}
                    }
                }
                EditorItem::Save => match self.editor.save(draft.clone()).await {
                    Ok(id) => {
                        println!("{} Saved \"{}\".", "✔".green(), draft.set.title);
                        debug!(id = %id, "leaving editor after save");
                        return Ok(Some(Route::Dashboard));
                    }
                    Err(e) => print_error(&e),
                },
                EditorItem::Discard => return Ok(Some(Route::Dashboard)),
            }
        }
    }

    fn edit_level(&self, draft: &mut Draft, level_id: &str) -> Result<(), DomainError> {
        let policy = *self.editor.policy();
        loop {
            let Some(level) = draft.set.level(level_id).cloned() else {
                return Ok(());
            };
            let position = draft
                .set
                .levels
                .iter()
                .position(|l| l.id == level_id)
                .unwrap_or_default();

            let mut items: Vec<LevelItem> = level
                .options
                .iter()
                .enumerate()
                .map(|(index, text)| LevelItem::Option {
                    index,
                    text: text.clone(),
                })
                .collect();
            items.push(LevelItem::AddOption);
            if policy.can_remove_option(&level) {
                items.push(LevelItem::RemoveOption);
            }
            items.push(LevelItem::Rename);
            if position > 0 {
                items.push(LevelItem::MoveUp);
            }
            if position + 1 < draft.set.levels.len() {
                items.push(LevelItem::MoveDown);
            }
            if policy.can_remove_level(&draft.set) {
                items.push(LevelItem::RemoveLevel);
            }
            items.push(LevelItem::Done);

            let prompt = format!("{} (select an option to edit it)", level.name);
            let Some(choice) = answered(
                Select::new(&prompt, items)
                    .with_page_size(PAGE_SIZE)
                    .prompt(),
            )?
            else {
                return Ok(());
            };

            let result = match choice {
                LevelItem::Option { index, text } => {
                    match answered(Text::new("Option:").with_initial_value(&text).prompt())? {
                        Some(v) => draft.set.update_option(level_id, index, v),
                        None => Ok(()),
                    }
                }
                LevelItem::AddOption => draft.set.add_option(level_id).map(|_| ()),
                LevelItem::RemoveOption => {
                    let options: Vec<LevelItem> = level
                        .options
                        .iter()
                        .enumerate()
                        .map(|(index, text)| LevelItem::Option {
                            index,
                            text: text.clone(),
                        })
                        .collect();
                    match answered(Select::new("Remove which option?", options).prompt())? {
                        Some(LevelItem::Option { index, .. }) => draft
                            .set
                            .remove_option(level_id, index, &policy)
                            .map(|_| ()),
                        _ => Ok(()),
                    }
                }
                LevelItem::Rename => {
                    match answered(
                        Text::new("Level name:")
                            .with_initial_value(&level.name)
                            .prompt(),
                    )? {
                        Some(name) => draft.set.rename_level(level_id, name),
                        None => Ok(()),
                    }
                }
                LevelItem::MoveUp => draft.set.move_level(level_id, position.saturating_sub(1)),
                LevelItem::MoveDown => draft.set.move_level(level_id, position + 1),
                LevelItem::RemoveLevel => {
                    return match draft.set.remove_level(level_id, &policy) {
                        Ok(_) => Ok(()),
                        Err(e) => {
                            print_error(&e);
                            Ok(())
                        }
                    };
                }
                LevelItem::Done => return Ok(()),
            };
            if let Err(e) = result {
                print_error(&e);
            }
        }
    }

    async fn play_screen(&self, set: &DecisionSet, ctx: PlayContext) -> Result<PlayExit, DomainError> {
        let total = set.levels.len();
        let mut session = PlaySession::start(set);

        loop {
            print_progress(set, &session);

            if session.is_complete() {
                print_complete(set, &session);
                let mut actions = vec![PlayAction::SpinAgain, PlayAction::Back];
                if ctx == PlayContext::Demo {
                    actions.push(PlayAction::CreateOwn);
                }
                actions.push(PlayAction::Quit);
                let choices: Vec<PlayChoice> =
                    actions.into_iter().map(|a| PlayChoice(a, ctx)).collect();

                match answered(Select::new("What next?", choices).prompt())? {
                    Some(PlayChoice(PlayAction::SpinAgain, _)) => session.reset(set),
                    Some(PlayChoice(PlayAction::CreateOwn, _)) => {
                        return Ok(PlayExit::Navigate(Route::Editor(EditorTarget::New)));
                    }
                    Some(PlayChoice(PlayAction::Quit, _)) => return Ok(PlayExit::Quit),
                    _ => return Ok(PlayExit::Back),
                }
                continue;
            }

            let Some(level) = session.current_level(set) else {
                return Ok(PlayExit::Back);
            };
            println!("{} {}", "Current wheel:".dark_grey(), level.name.as_str().cyan());

            let choices = vec![
                PlayChoice(PlayAction::Spin, ctx),
                PlayChoice(PlayAction::Back, ctx),
            ];
            match answered(Select::new(&session.level_label(total), choices).prompt())? {
                Some(PlayChoice(PlayAction::Spin, _)) => {}
                _ => return Ok(PlayExit::Back),
            }

            let Some(pending) = self.play.start_spin(&session, set) else {
                println!("{}", "Nothing to spin on this wheel.".yellow());
                continue;
            };
            let outcome = animate_spin(pending, &level.options, self.frame)
                .await
                .ok_or_else(|| DomainError::Wheel("spin timer dropped".into()))?;
            println!("{} {}", "Result:".dark_grey(), outcome.option.as_str().bold());
            if session.current_level_index() + 1 < total {
                println!("{}", "Next wheel coming up...".dark_grey());
            }
            if ctx == PlayContext::Preview {
                self.play.record_preview(&mut session, set, outcome).await?;
            } else {
                self.play.record(&mut session, set, outcome).await?;
            }
        }
    }
}

fn print_draft(draft: &Draft) {
    println!();
    println!("{}", draft.heading().bold());
    println!("{} {}", "Title:".dark_grey(), draft.set.title);
    println!("{} {}", "Description:".dark_grey(), draft.set.description);
    for (i, level) in draft.set.levels.iter().enumerate() {
        println!(
            "  {}. {}: {}",
            i + 1,
            level.name.as_str().cyan(),
            level.options.join(", ")
        );
    }
}

fn print_progress(set: &DecisionSet, session: &PlaySession) {
    let total = set.levels.len();
    println!();
    println!("{}", set.title.as_str().bold());
    if !session.is_complete() {
        println!(
            "{}  {}",
            session.level_label(total),
            progress_bar(session.progress_percent(total), BAR_WIDTH)
        );
    }
    for (level, pick) in session.decisions(set) {
        println!("  {} {}: {}", "✔".green(), level, pick);
    }
}

fn print_complete(set: &DecisionSet, session: &PlaySession) {
    println!();
    println!("{}", "🎉 Decision Complete!".bold().magenta());
    println!("{}", "Your decisions:".dark_grey());
    for (level, pick) in session.decisions(set) {
        println!("  {} → {}", level, pick.bold());
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self, start: Route) -> Result<(), DomainError> {
        let mut route = start;
        loop {
            let next = match self.navigator.resolve(&route).await? {
                Screen::Dashboard => self.dashboard().await,
                Screen::Editor(draft) => self.edit(draft).await,
                Screen::Play { set, is_demo } => {
                    let ctx = if is_demo {
                        PlayContext::Demo
                    } else {
                        PlayContext::Stored
                    };
                    match self.play_screen(&set, ctx).await {
                        Ok(PlayExit::Back) => Ok(Some(Route::Dashboard)),
                        Ok(PlayExit::Navigate(r)) => Ok(Some(r)),
                        Ok(PlayExit::Quit) => Ok(None),
                        Err(e) => Err(e),
                    }
                }
            };
            match next {
                Ok(Some(r)) => {
                    debug!(from = %route, to = %r, "navigating");
                    route = r;
                }
                Ok(None) | Err(DomainError::Interrupted) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    async fn run_auto(&self, start: Route) -> Result<(), DomainError> {
        let set = match self.navigator.resolve(&start).await? {
            Screen::Play { set, .. } => set,
            _ => {
                return Err(DomainError::Ui(format!(
                    "auto play needs a playable route, got {}",
                    start
                )));
            }
        };
        set.validate()?;
        let session = self.play.play_through(&set).await?;
        println!("{}", set.title);
        for (level, pick) in session.decisions(&set) {
            println!("{}: {}", level, pick);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::{Catalog, EditPolicy, samples};
    use crate::usecases::Wheel;

    fn port() -> TuiInputPort {
        let repo: Arc<dyn DecisionSetRepo> =
            Arc::new(InMemoryStore::new(Catalog::new(samples::starter_sets())));
        let editor = Arc::new(EditorService::new(repo.clone(), EditPolicy::default()));
        let navigator = Arc::new(Navigator::new(repo.clone(), editor.clone()));
        let wheel = Arc::new(Wheel::seeded(5, Duration::from_millis(4000)));
        let play = Arc::new(PlayService::new(wheel, repo.clone(), Duration::from_millis(1500)));
        TuiInputPort::new(repo, navigator, editor, play, Duration::from_millis(50))
    }

    #[test]
    fn escape_and_interrupt_are_told_apart() {
        assert_eq!(answered(Ok::<_, InquireError>(3)), Ok(Some(3)));
        assert_eq!(
            answered::<u8>(Err(InquireError::OperationCanceled)),
            Ok(None)
        );
        assert_eq!(
            answered::<u8>(Err(InquireError::OperationInterrupted)),
            Err(DomainError::Interrupted)
        );
        assert!(matches!(
            answered::<u8>(Err(InquireError::NotTTY)),
            Err(DomainError::Ui(_))
        ));
    }

    #[test]
    fn cards_show_levels_and_last_use() {
        let sets = samples::starter_sets();
        let card = set_card(&sets[0]);
        assert!(card.starts_with(&sets[0].title));
        assert!(card.contains("last used 2 days ago"));
        let mut fresh = sets[0].clone();
        fresh.last_used = None;
        assert!(!set_card(&fresh).contains("last used"));
    }

    #[test]
    fn demo_offers_create_your_own() {
        assert_eq!(
            PlayAction::Back.label(PlayContext::Preview),
            "Back to Editor"
        );
        assert_eq!(
            PlayAction::Back.label(PlayContext::Demo),
            "Back to Dashboard"
        );
        assert_eq!(
            PlayAction::CreateOwn.label(PlayContext::Demo),
            "Create Your Own"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn auto_play_decides_every_level() {
        let port = port();
        port.run_auto(Route::Play("2".into())).await.unwrap();
        let used = port.repo.find("2").await.unwrap().unwrap();
        assert_ne!(used.last_used.as_deref(), Some("Yesterday"));
    }

    #[tokio::test(start_paused = true)]
    async fn auto_play_plays_the_demo() {
        port().run_auto(Route::play_demo()).await.unwrap();
    }

    #[tokio::test]
    async fn auto_play_rejects_non_play_routes() {
        let port = port();
        assert!(matches!(
            port.run_auto(Route::Dashboard).await,
            Err(DomainError::Ui(_))
        ));
        // Unknown id redirects to the dashboard, which is not playable.
        assert!(matches!(
            port.run_auto(Route::Play("missing".into())).await,
            Err(DomainError::Ui(_))
        ));
    }
}
