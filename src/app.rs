use egui::{Key, Modifiers, Painter, Rect};
use log::{info, warn};

use crate::command::{Command, CommandHistory};
use crate::document::Document;
use crate::element::Style;
use crate::input::{InputHandler, PointerEvent};
use crate::panels;
use crate::persistence;
use crate::renderer::Renderer;
use crate::tool::{Tool, ToolKind};

/// Where "Save" and "Open" read and write the JSON document snapshot.
const SNAPSHOT_FILE: &str = "sketchpad.json";

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    document: Document,
    active_tool: ToolKind,
    style: Style,
    #[serde(skip)]
    history: CommandHistory,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    status: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            document: Document::new(),
            active_tool: ToolKind::default(),
            style: Style::default(),
            history: CommandHistory::new(),
            input: InputHandler::new(),
            renderer: Renderer::new(),
            status: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<PaintApp>(storage, eframe::APP_KEY) {
                info!("restored previous session");
                return app;
            }
        }
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn active_tool(&self) -> &ToolKind {
        &self.active_tool
    }

    /// Switch tools, abandoning any half-finished gesture.
    pub fn set_active_tool_by_name(&mut self, name: &str) {
        if self.active_tool.name() == name {
            return;
        }
        if let Some(tool) = ToolKind::by_name(name) {
            self.active_tool.cancel();
            info!("tool changed to {name}");
            self.active_tool = tool;
        }
    }

    /// Run a command through the history, surfacing failures as status
    /// text rather than panicking.
    pub fn execute(&mut self, command: Command) {
        let label = command.label();
        if let Err(err) = self.history.execute(command, &mut self.document) {
            warn!("{label} failed: {err}");
            self.status = Some(err.to_string());
        } else {
            self.status = None;
        }
    }

    pub fn undo(&mut self) {
        if let Err(err) = self.history.undo(&mut self.document) {
            self.status = Some(err.to_string());
        }
    }

    pub fn redo(&mut self) {
        if let Err(err) = self.history.redo(&mut self.document) {
            self.status = Some(err.to_string());
        }
    }

    /// Save the document as a JSON snapshot next to the executable.
    pub fn save_snapshot(&mut self) {
        match persistence::save_document(&self.document, std::path::Path::new(SNAPSHOT_FILE)) {
            Ok(()) => {
                info!("saved document to {SNAPSHOT_FILE}");
                self.status = Some(format!("Saved {SNAPSHOT_FILE}"));
            }
            Err(err) => {
                warn!("saving {SNAPSHOT_FILE} failed: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Replace the document with a previously saved snapshot. The undo
    /// history belongs to the old document, so it is cleared.
    pub fn load_snapshot(&mut self) {
        match persistence::load_document(std::path::Path::new(SNAPSHOT_FILE)) {
            Ok(document) => {
                info!("loaded document from {SNAPSHOT_FILE}");
                self.document = document;
                self.history.clear();
                self.active_tool.cancel();
                self.status = Some(format!("Loaded {SNAPSHOT_FILE}"));
            }
            Err(err) => {
                warn!("loading {SNAPSHOT_FILE} failed: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.input.set_canvas_rect(rect);
    }

    /// Route this frame's pointer input to the active tool; a finalized
    /// element lands in the active layer via the command history.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context) {
        for event in self.input.poll(ctx) {
            match event {
                PointerEvent::Down(pos) => {
                    self.active_tool.on_pointer_down(pos, self.style);
                }
                PointerEvent::Move(pos) => {
                    self.active_tool.on_pointer_move(pos);
                }
                PointerEvent::Up(pos) => {
                    if let Some(element) = self.active_tool.on_pointer_up(pos) {
                        if let Some(layer_id) = self.document.active_layer_id() {
                            self.execute(Command::AddElement { layer_id, element });
                        }
                    }
                }
            }
        }
    }

    pub fn render_canvas(&self, painter: &Painter, canvas: Rect) {
        self.renderer
            .render(&self.document, &self.active_tool, painter, canvas);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let redo = ctx.input_mut(|i| {
            i.consume_key(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z)
                || i.consume_key(Modifiers::COMMAND, Key::Y)
        });
        let undo = ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Z));
        let cancel = ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape));

        if redo {
            self.redo();
        }
        if undo {
            self.undo();
        }
        if cancel {
            self.active_tool.cancel();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::tools_panel(self, ctx);
        panels::layers_panel(self, ctx);
        panels::central_panel(self, ctx);

        // Keep repainting while a stroke is in flight so the preview
        // follows the pointer.
        if self.active_tool.is_drawing() {
            ctx.request_repaint();
        }
    }
}
