// SPDX-License-Identifier: PMPL-1.0-or-later

//! Current-language state and the switch protocol.
//!
//! A [`LanguageSelector`] owns the active catalog. Switching first resolves
//! and fully loads the new catalog; only then is the old one dropped and
//! the host told to refresh. Any failure leaves the previous language in
//! place.

use crate::backend::{CatalogBackend, LoadedModule};
use crate::catalog::Catalog;
use crate::discovery;
use crate::error::LangError;
use crate::registry::{self, LangId, LanguageDescriptor};
use crate::settings::SettingsStore;
use crate::translate::Translator;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageState {
    /// Built-in source strings; no catalog loaded.
    #[default]
    Default,
    Loaded { id: LangId, module: LoadedModule },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Switched(LangId),
    /// The requested language was already active.
    Unchanged(LangId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorOptions {
    pub reload_menu: bool,
    pub update_title: bool,
    /// Codepage used for catalogs that do not declare one.
    pub ansi_codepage: u32,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            reload_menu: true,
            update_title: true,
            ansi_codepage: crate::codepage::CP_DEFAULT_ANSI,
        }
    }
}

/// Host-side effects of a language switch. Every hook defaults to a no-op.
pub trait HostHooks {
    fn rebuild_menus(&mut self) {}
    fn refresh_titles(&mut self) {}
    fn refresh_indicators(&mut self) {}
    fn set_thread_locale(&mut self, _id: LangId) {}
    fn set_process_locale(&mut self, _locale: &str) {}
    fn notify_error(&mut self, _error: &LangError) {}
}

/// Hooks for callers without UI, e.g. during startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

impl HostHooks for NoHost {}

/// Candidate locale tags in preference order.
pub trait LocaleSource {
    fn candidate_locales(&self) -> Vec<String>;
}

/// Locales reported by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocales;

impl LocaleSource for SystemLocales {
    fn candidate_locales(&self) -> Vec<String> {
        sys_locale::get_locales().collect()
    }
}

impl LocaleSource for [&str] {
    fn candidate_locales(&self) -> Vec<String> {
        self.iter().map(|tag| tag.to_string()).collect()
    }
}

impl LocaleSource for Vec<String> {
    fn candidate_locales(&self) -> Vec<String> {
        self.clone()
    }
}

/// One row of the language dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    pub id: LangId,
    /// Catalog file, `None` for the built-in language.
    pub path: Option<PathBuf>,
    pub descriptor: &'static LanguageDescriptor,
}

impl LanguageChoice {
    pub fn label<F>(&self, localized: F, ansi_codepage: u32) -> String
    where
        F: Fn(u32) -> Option<String>,
    {
        registry::display_name(self.descriptor, localized, ansi_codepage)
    }
}

pub struct LanguageSelector<B, S> {
    backend: B,
    settings: S,
    language_dir: PathBuf,
    options: SelectorOptions,
    state: LanguageState,
}

impl<B, S> LanguageSelector<B, S>
where
    B: CatalogBackend,
    S: SettingsStore,
{
    pub fn new(backend: B, settings: S, language_dir: PathBuf, options: SelectorOptions) -> Self {
        Self {
            backend,
            settings,
            language_dir,
            options,
            state: LanguageState::Default,
        }
    }

    pub fn current(&self) -> LangId {
        match &self.state {
            LanguageState::Default => LangId::SOURCE,
            LanguageState::Loaded { id, .. } => *id,
        }
    }

    pub fn state(&self) -> &LanguageState {
        &self.state
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            LanguageState::Default => None,
            LanguageState::Loaded { module, .. } => Some(&module.catalog),
        }
    }

    pub fn translator(&self) -> Translator<'_> {
        Translator::new(self.catalog(), self.options.ansi_codepage)
    }

    pub fn language_dir(&self) -> &Path {
        &self.language_dir
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn langs_installed(&self) -> bool {
        discovery::langs_installed(&self.language_dir, self.backend.extension())
    }

    /// Installed languages followed by the built-in one.
    pub fn available(&self) -> Vec<LanguageChoice> {
        let mut choices: Vec<LanguageChoice> =
            discovery::available_languages(&self.language_dir, &self.backend)
                .into_iter()
                .filter_map(|found| {
                    let descriptor = registry::lookup_by_id(found.id)?;
                    Some(LanguageChoice {
                        id: found.id,
                        path: Some(found.path),
                        descriptor,
                    })
                })
                .collect();
        if let Some(descriptor) = registry::lookup_by_id(LangId::SOURCE) {
            choices.push(LanguageChoice {
                id: LangId::SOURCE,
                path: None,
                descriptor,
            });
        }
        choices
    }

    /// Position of the active language in `choices`.
    pub fn current_index(&self, choices: &[LanguageChoice]) -> Option<usize> {
        let current = self.current();
        choices.iter().position(|choice| choice.id == current)
    }

    /// Switch to `target`, optionally persisting it as the user's choice.
    ///
    /// On failure the host is notified once and the previous language stays
    /// active.
    pub fn select(
        &mut self,
        target: LangId,
        persist: bool,
        hooks: &mut dyn HostHooks,
    ) -> Result<SelectOutcome, LangError> {
        let result = self.switch_to(target, persist, true, hooks);
        if let Err(err) = &result {
            warn!(language = %target, error = %err, "language switch failed");
            hooks.notify_error(err);
        }
        result
    }

    /// Pick the startup language: the persisted override if any, else the
    /// first OS locale with an installed catalog. Failures are only logged.
    ///
    /// Only the locale hooks fire; the host has no menus or windows yet.
    pub fn initialize<L>(&mut self, locales: &L, hooks: &mut dyn HostHooks) -> LangId
    where
        L: LocaleSource + ?Sized,
    {
        if let Some(id) = self.settings.language_override() {
            debug!(language = %id, "using persisted language override");
            if let Err(err) = self.switch_to(id, false, false, hooks) {
                warn!(language = %id, error = %err, "persisted language unavailable");
            }
            return self.current();
        }

        let mut tried: Vec<LangId> = Vec::new();
        for tag in locales.candidate_locales() {
            let Some(desc) = registry::lookup_by_tag(&tag) else {
                debug!(locale = %tag, "locale has no known language");
                continue;
            };
            if desc.id.is_source() || tried.contains(&desc.id) {
                continue;
            }
            tried.push(desc.id);
            match self.switch_to(desc.id, false, false, hooks) {
                Ok(_) => return desc.id,
                Err(err) => debug!(locale = %tag, error = %err, "locale candidate skipped"),
            }
        }
        self.current()
    }

    fn switch_to(
        &mut self,
        target: LangId,
        persist: bool,
        refresh_ui: bool,
        hooks: &mut dyn HostHooks,
    ) -> Result<SelectOutcome, LangError> {
        if target.is_source() {
            info!("switching to built-in language");
            self.state = LanguageState::Default;
            self.after_switch(target, persist, refresh_ui, hooks);
            return Ok(SelectOutcome::Switched(target));
        }

        if matches!(self.state, LanguageState::Loaded { id, .. } if id == target) {
            if persist {
                self.persist(target);
            }
            return Ok(SelectOutcome::Unchanged(target));
        }

        let path = discovery::find_catalog(&self.language_dir, &self.backend, target)
            .ok_or(LangError::CatalogNotFound { language: target })?;
        let module = self.backend.load(&path)?;
        info!(language = %target, path = %path.display(), "language loaded");
        self.state = LanguageState::Loaded { id: target, module };
        self.after_switch(target, persist, refresh_ui, hooks);
        Ok(SelectOutcome::Switched(target))
    }

    fn after_switch(
        &mut self,
        id: LangId,
        persist: bool,
        refresh_ui: bool,
        hooks: &mut dyn HostHooks,
    ) {
        if persist {
            self.persist(id);
        }
        hooks.set_thread_locale(id);
        if let Some(desc) = registry::lookup_by_id(id) {
            if !desc.locale.is_empty() {
                hooks.set_process_locale(desc.locale);
            }
        }
        if !refresh_ui {
            return;
        }
        hooks.refresh_indicators();
        if self.options.reload_menu {
            hooks.rebuild_menus();
        }
        if self.options.update_title {
            hooks.refresh_titles();
        }
    }

    // The switch has already happened; a settings write failure only loses
    // the preference for the next run.
    fn persist(&mut self, id: LangId) {
        if let Err(err) = self.settings.set_language_override(id) {
            warn!(language = %id, error = %err, "could not persist language override");
        }
    }
}
