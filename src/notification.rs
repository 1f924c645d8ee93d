use std::collections::VecDeque;

use eframe::egui;

use crate::error::PaintError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A message the user has to acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Headline for the action followed by the error detail. Placeholders
    /// read as plain information.
    pub fn from_error(headline: &str, err: &PaintError) -> Self {
        match err {
            PaintError::NotImplemented(_) => Self::info(format!("{err}.")),
            _ => Self::error(format!("{headline}\n{err}")),
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NotificationKind::Info => "Information",
            NotificationKind::Error => "Error",
        }
    }
}

/// Modal notifications, shown one at a time in arrival order.
///
/// While one is open the canvas ignores pointer input.
#[derive(Debug, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        match notification.kind() {
            NotificationKind::Info => log::info!("{}", notification.message()),
            NotificationKind::Error => log::error!("{}", notification.message()),
        }
        self.queue.push_back(notification);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    pub fn is_blocking(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(notification) = self.current() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notification.title())
            .id(egui::Id::new("notification_modal"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.label(notification.message());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
            self.dismiss();
        }
    }
}
