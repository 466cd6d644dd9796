use std::rc::Rc;

use log::{debug, error};
use yew::Reducible;

use crate::config;
use crate::forms::{is_valid_email, EmailForm, FormSlot, Origin};
use crate::handoff::MailIntent;
use crate::navigation::{ScrollTarget, Section, SectionTargets};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the form now shows its error.
    Rejected,
    /// Mail intent requested. Carries the message to show the visitor.
    Sent { acknowledgment: &'static str },
}

pub fn scrolled_past_threshold(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD
}

/// Interactive state of the home page.
#[derive(Clone)]
pub struct HomeController<T, M> {
    scrolled: bool,
    active: Section,
    hero: EmailForm,
    footer: EmailForm,
    targets: SectionTargets<T>,
    mail: M,
}

impl<T: ScrollTarget, M: MailIntent> HomeController<T, M> {
    pub fn new(targets: SectionTargets<T>, mail: M) -> Self {
        Self {
            scrolled: false,
            active: Section::Overview,
            hero: EmailForm::default(),
            footer: EmailForm::default(),
            targets,
            mail,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn form(&self, slot: FormSlot) -> &EmailForm {
        match slot {
            FormSlot::Hero => &self.hero,
            FormSlot::Footer => &self.footer,
        }
    }

    fn form_mut(&mut self, slot: FormSlot) -> &mut EmailForm {
        match slot {
            FormSlot::Hero => &mut self.hero,
            FormSlot::Footer => &mut self.footer,
        }
    }

    #[cfg(test)]
    pub fn targets(&self) -> &SectionTargets<T> {
        &self.targets
    }

    /// Returns true when the scrolled flag flipped.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = scrolled_past_threshold(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn navigate_to_section(&mut self, section: Section) {
        self.active = section;
        if !self.targets.scroll_to(section) {
            debug!("Section {:?} is not mounted, skipping scroll", section);
        }
    }

    /// Scrolls to the footer without touching the highlighted tab.
    pub fn navigate_to_contact(&self) {
        if !self.targets.scroll_to(Section::Contact) {
            debug!("Contact section is not mounted, skipping scroll");
        }
    }

    pub fn on_input(&mut self, slot: FormSlot, value: String) {
        self.form_mut(slot).input(value);
    }

    /// Submits the value currently held by the origin's form.
    pub fn submit_email(&mut self, origin: Origin) -> SubmitOutcome {
        let slot = origin.form();
        if !is_valid_email(&self.form(slot).value) {
            debug!("Rejected {} submission", origin);
            self.form_mut(slot).reject();
            return SubmitOutcome::Rejected;
        }

        self.form_mut(slot).error = false;
        if let Err(err) = self.mail.request_mail_intent(&self.form(slot).value, origin) {
            // The visitor still gets the acknowledgment.
            error!("Mail intent for {} failed: {}", origin, err);
        }
        self.form_mut(slot).reset();

        SubmitOutcome::Sent {
            acknowledgment: origin.acknowledgment(),
        }
    }
}

pub enum HomeAction {
    Scroll(f64),
    NavigateTo(Section),
    NavigateToContact,
    Input(FormSlot, String),
    Submit(Origin),
}

/// Reducer state for the home view. `submissions` bumps on every submit so
/// the view can react to each acknowledgment.
#[derive(Clone)]
pub struct HomeState<T, M> {
    pub controller: HomeController<T, M>,
    pub submissions: usize,
    pub acknowledgment: Option<&'static str>,
}

impl<T, M> HomeState<T, M> {
    pub fn new(controller: HomeController<T, M>) -> Self {
        Self {
            controller,
            submissions: 0,
            acknowledgment: None,
        }
    }
}

impl<T: ScrollTarget + Clone, M: MailIntent + Clone> Reducible for HomeState<T, M> {
    type Action = HomeAction;

    // Returning `self` untouched skips the re-render.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            HomeAction::NavigateToContact => {
                self.controller.navigate_to_contact();
                return self;
            }
            HomeAction::Scroll(offset)
                if scrolled_past_threshold(offset) == self.controller.is_scrolled() =>
            {
                return self;
            }
            _ => {}
        }

        let mut next = (*self).clone();
        match action {
            HomeAction::Scroll(offset) => {
                next.controller.on_scroll(offset);
            }
            HomeAction::NavigateTo(section) => next.controller.navigate_to_section(section),
            HomeAction::Input(slot, value) => next.controller.on_input(slot, value),
            HomeAction::Submit(origin) => {
                next.submissions += 1;
                next.acknowledgment = match next.controller.submit_email(origin) {
                    SubmitOutcome::Sent { acknowledgment } => Some(acknowledgment),
                    SubmitOutcome::Rejected => None,
                };
            }
            HomeAction::NavigateToContact => {}
        }
        Rc::new(next)
    }
}
