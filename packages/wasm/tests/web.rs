//! Browser tests for the exported bindings

#[cfg(target_arch = "wasm32")]
mod wasm_binding_tests {
    use pagekit_wasm::{new_id_js, starter_project_js, Editor};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_new_id_in_browser() {
        let id = new_id_js("page", None).unwrap();
        assert!(id.starts_with("page_"));
        assert!(new_id_js("widget", None).is_err());
    }

    #[wasm_bindgen_test]
    fn test_editor_session_in_browser() {
        let project = starter_project_js().unwrap();
        let mut editor = Editor::new("").unwrap();
        editor
            .dispatch(&format!(r#"{{"type": "SET_PROJECT", "payload": {}}}"#, project))
            .unwrap();

        assert!(editor.dispatch(r#"{"type": "DELETE_COMPONENT", "payload": "ghost"}"#).is_err());
        assert!(!editor.can_undo());

        let code = editor.generate(r#"{"framework": "html"}"#).unwrap();
        assert!(code.as_string().unwrap().contains("<!DOCTYPE html>"));
    }
}
