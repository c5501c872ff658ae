use orrery_engine::{
    BodyRef, FixedTimestep, InputEvent, InputQueue, OrreryConfig, RenderBuffer, Result,
    Simulation,
};

/// Drives a [`Simulation`] from browser frames.
///
/// `lib.rs` keeps one runner in a `thread_local!` and exports free functions
/// via `#[wasm_bindgen]`, since wasm-bindgen cannot export this struct's
/// borrow-heavy API directly.
pub struct SimulationRunner {
    sim: Simulation,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    running: bool,
}

impl SimulationRunner {
    pub fn new(config: OrreryConfig) -> Result<Self> {
        let timestep = FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let sim = Simulation::new(config)?;
        Ok(Self {
            sim,
            input: InputQueue::new(),
            render_buffer,
            timestep,
            running: true,
        })
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, advance whole ticks, then rebuild
    /// the render buffer. Returns `false` once the user has quit.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.running {
            return false;
        }

        for event in self.input.drain() {
            if self.sim.on_input(&event).is_quit() {
                self.running = false;
                self.render_buffer.clear();
                return false;
            }
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.sim.on_tick();
        }

        self.sim.on_render(self.timestep.alpha(), &mut self.render_buffer);
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn max_instances(&self) -> u32 {
        self.render_buffer.max_instances() as u32
    }

    pub fn sprite_manifest(&self) -> Result<String> {
        self.sim.sprite_manifest_json()
    }

    // ---- Selection ----

    /// Selection encoded for JS: kind (-1 none, 0 star, 1 planet, 2 moon),
    /// planet index, moon index. Unused indices are -1.
    pub fn selection(&self) -> [i32; 3] {
        match self.sim.selected() {
            None => [-1, -1, -1],
            Some(BodyRef::Star) => [0, -1, -1],
            Some(BodyRef::Planet(p)) => [1, p as i32, -1],
            Some(BodyRef::Moon { planet, moon }) => [2, planet as i32, moon as i32],
        }
    }
}
