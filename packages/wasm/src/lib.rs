use pagekit_codegen::{generate as generate_code, GenerateOptions};
use pagekit_editor::{Action, Component, EditorConfig, EditorState, EditorStore, Page, Project};
use pagekit_model::{component_library, new_id, IdKind};
use serde::Serialize;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// What the UI renders from, as one JSON document
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateView<'a> {
    project: Option<&'a Arc<Project>>,
    current_page_id: Option<&'a str>,
    current_page: Option<&'a Page>,
    selected_component: Option<&'a Arc<Component>>,
    is_preview: bool,
    can_undo: bool,
    can_redo: bool,
}

impl<'a> From<&'a EditorState> for StateView<'a> {
    fn from(state: &'a EditorState) -> Self {
        Self {
            project: state.project(),
            current_page_id: state.current_page_id(),
            current_page: state.current_page(),
            selected_component: state.selected_live(),
            is_preview: state.is_preview(),
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
        }
    }
}

/// Editor session held by the browser UI
#[wasm_bindgen]
pub struct Editor {
    store: EditorStore,
}

#[wasm_bindgen]
impl Editor {
    /// `config_json` is the `editor` section of `pagekit.config.json`; pass
    /// an empty string for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Editor, JsValue> {
        Editor::from_config_json(config_json).map_err(|e| JsValue::from_str(&e))
    }

    /// Apply one action, given as `{ "type": ..., "payload": ... }`
    pub fn dispatch(&mut self, action_json: &str) -> Result<(), JsValue> {
        self.dispatch_json(action_json).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&StateView::from(self.store.state()))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// The current project, pretty-printed for saving
    #[wasm_bindgen(js_name = projectJson)]
    pub fn project_json(&self) -> Result<Option<String>, JsValue> {
        self.project_json_string()
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Generate code for the current project. `options_json` carries the
    /// export dialog's `{ framework, style, typescript, export, target }`.
    pub fn generate(&self, options_json: &str) -> Result<JsValue, JsValue> {
        let code = self.generate_json(options_json).map_err(|e| JsValue::from_str(&e))?;
        Ok(JsValue::from_str(&code))
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.store.state().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.store.state().can_redo()
    }
}

impl Editor {
    fn from_config_json(config_json: &str) -> Result<Editor, String> {
        let config = if config_json.trim().is_empty() {
            EditorConfig::default()
        } else {
            serde_json::from_str(config_json).map_err(|e| format!("Invalid editor config: {}", e))?
        };
        Ok(Editor {
            store: EditorStore::new(config),
        })
    }

    fn dispatch_json(&mut self, action_json: &str) -> Result<(), String> {
        let action: Action =
            serde_json::from_str(action_json).map_err(|e| format!("Invalid action: {}", e))?;
        self.store.dispatch(action).map_err(|e| e.to_string())?;
        Ok(())
    }

    fn project_json_string(&self) -> Result<Option<String>, serde_json::Error> {
        self.store
            .state()
            .project()
            .map(|project| project.to_json_pretty())
            .transpose()
    }

    /// `{ "markup": ..., "stylesheet": ... }`
    fn generate_json(&self, options_json: &str) -> Result<String, String> {
        let options: GenerateOptions = if options_json.trim().is_empty() {
            GenerateOptions::default()
        } else {
            serde_json::from_str(options_json).map_err(|e| format!("Invalid options: {}", e))?
        };
        let project = self.store.state().project().ok_or("No project loaded")?;
        let code = generate_code(project, &options).map_err(|e| e.to_string())?;
        serde_json::to_string(&code).map_err(|e| format!("Serialization error: {}", e))
    }
}

/// New identifier; `kind` is `project`, `page` or `component`
#[wasm_bindgen(js_name = newId)]
pub fn new_id_js(kind: &str, component_type: Option<String>) -> Result<String, JsValue> {
    let kind = parse_id_kind(kind).map_err(|e| JsValue::from_str(&e))?;
    Ok(new_id(kind, component_type.as_deref()))
}

fn parse_id_kind(kind: &str) -> Result<IdKind, String> {
    match kind {
        "project" => Ok(IdKind::Project),
        "page" => Ok(IdKind::Page),
        "component" => Ok(IdKind::Component),
        other => Err(format!("Unknown id kind: {}", other)),
    }
}

/// Project a fresh editor session starts with, as JSON
#[wasm_bindgen(js_name = starterProject)]
pub fn starter_project_js() -> Result<String, JsValue> {
    Project::starter()
        .to_json_pretty()
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Palette of insertable component types, grouped by category
#[wasm_bindgen(js_name = componentLibrary)]
pub fn component_library_js() -> Result<String, JsValue> {
    serde_json::to_string(&component_library())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
