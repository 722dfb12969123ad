//! WebAssembly bindings for Toroidal Life.
//!
//! Provides a thin wrapper around `GridEngine` for browser environments.

use wasm_bindgen::prelude::*;

use crate::{
    compute::{GridEngine, GridError, GridStats},
    schema::Seed,
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

fn grid_error(e: GridError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WebAssembly wrapper for the Game of Life engine.
#[wasm_bindgen]
pub struct WasmGridEngine {
    engine: GridEngine,
}

#[wasm_bindgen]
impl WasmGridEngine {
    /// Create a new engine with all cells dead.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<WasmGridEngine, JsValue> {
        let engine = GridEngine::new(width, height).map_err(grid_error)?;
        Ok(WasmGridEngine { engine })
    }

    /// Create an engine that takes ownership of a host-allocated buffer.
    ///
    /// The buffer must hold `width * height` bytes and is zeroed.
    #[wasm_bindgen(js_name = fromBuffer)]
    pub fn from_buffer(
        buffer: Vec<u8>,
        width: usize,
        height: usize,
    ) -> Result<WasmGridEngine, JsValue> {
        let engine = GridEngine::with_storage(buffer, width, height).map_err(grid_error)?;
        Ok(WasmGridEngine { engine })
    }

    /// Perform one simulation step.
    #[wasm_bindgen]
    pub fn step(&mut self) {
        self.engine.step();
    }

    /// Run multiple simulation steps.
    #[wasm_bindgen]
    pub fn run(&mut self, steps: u64) {
        self.engine.run(steps);
    }

    /// Flip a cell between alive and dead.
    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), JsValue> {
        self.engine.toggle_cell(x, y).map_err(grid_error)
    }

    /// Whether a cell is alive.
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool, JsValue> {
        self.engine.get_cell(x, y).map_err(grid_error)
    }

    /// Kill every cell and reset the generation counter.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Get current generation.
    #[wasm_bindgen(js_name = getGeneration)]
    pub fn get_generation(&self) -> u64 {
        self.engine.generation()
    }

    /// Get grid width.
    #[wasm_bindgen(js_name = getWidth)]
    pub fn get_width(&self) -> usize {
        self.engine.width()
    }

    /// Get grid height.
    #[wasm_bindgen(js_name = getHeight)]
    pub fn get_height(&self) -> usize {
        self.engine.height()
    }

    /// Number of live cells.
    #[wasm_bindgen]
    pub fn population(&self) -> usize {
        self.engine.population()
    }

    /// Copy of the row-major cell bytes (one per cell, 0 or 1).
    #[wasm_bindgen]
    pub fn cells(&self) -> Vec<u8> {
        self.engine.cells().to_vec()
    }

    /// Get grid statistics as a JS object.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        let stats = GridStats::from_engine(&self.engine);
        serde_wasm_bindgen::to_value(&stats)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Apply a seed pattern on top of the current cells.
    #[wasm_bindgen]
    pub fn seed(&mut self, seed_json: &str) -> Result<(), JsValue> {
        let seed: Seed = serde_json::from_str(seed_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))?;
        seed.apply(&mut self.engine).map_err(grid_error)
    }
}
