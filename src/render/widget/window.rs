// egui window hosting the widget labels

use super::{TickSchedule, WidgetView};
use crate::monitor::Monitor;
use crate::sysinfo_repo::CounterSource;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const INNER_SIZE: [f32; 2] = [320.0, 150.0];
const HEADLINE_SIZE: f32 = 16.0;
const DETAIL_SIZE: f32 = 13.0;

struct WidgetApp<S> {
    monitor: Monitor<S>,
    view: WidgetView,
    schedule: TickSchedule,
    failure: Rc<RefCell<Option<anyhow::Error>>>,
}

impl<S: CounterSource> eframe::App for WidgetApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.schedule.poll(Instant::now())
            && let Err(e) = self.monitor.tick(&mut self.view)
        {
            tracing::error!(error = %format!("{:#}", e), "widget tick failed");
            *self.failure.borrow_mut() = Some(e);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.label(egui::RichText::new(&self.view.upload).size(HEADLINE_SIZE));
                ui.add_space(5.0);
                ui.label(egui::RichText::new(&self.view.download).size(HEADLINE_SIZE));
                ui.add_space(5.0);
                ui.label(egui::RichText::new(&self.view.cpu).size(DETAIL_SIZE));
                ui.add_space(5.0);
                ui.label(egui::RichText::new(&self.view.ram).size(DETAIL_SIZE));
            });
        });

        ctx.request_repaint_after(self.schedule.remaining(Instant::now()));
    }
}

/// Open the widget window and tick `monitor` every `period` until the window
/// is closed. A failed tick closes the window and is returned here.
pub fn run<S: CounterSource + 'static>(
    monitor: Monitor<S>,
    period: Duration,
    title: &str,
) -> anyhow::Result<()> {
    let failure = Rc::new(RefCell::new(None));
    let app = WidgetApp {
        monitor,
        view: WidgetView::default(),
        schedule: TickSchedule::starting_at(Instant::now(), period),
        failure: failure.clone(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(INNER_SIZE),
        ..Default::default()
    };

    eframe::run_native(title, options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("widget window: {}", e))?;

    match failure.borrow_mut().take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
