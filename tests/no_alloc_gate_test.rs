use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048::core::{GameSnapshot, GameState, Grid, SimpleRng};
use tui_2048::types::{Direction, GameAction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Drive the win and game-over paths once so lazily registered log callsites
/// are set up before counting starts.
fn warm_up_log_callsites() {
    let won = Grid::from_values([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    GameState::with_grid(won, SimpleRng::new(1)).apply_move(Direction::Left);

    let dying = Grid::from_values([[4, 8, 4, 8], [8, 4, 8, 4], [4, 8, 4, 8], [0, 16, 32, 64]]).unwrap();
    let mut state = GameState::with_grid(dying, SimpleRng::new(1));
    state.apply_move(Direction::Left);
    state.restart();
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(SimpleRng::new(1));
    gs.initialize();
    let mut snap = GameSnapshot::default();
    warm_up_log_callsites();

    let allocs = with_alloc_counting(|| {
        for i in 0..2_000 {
            let d = Direction::ALL[i % 4];
            let _ = gs.apply_move(d);
            gs.snapshot_into(&mut snap);
            let _ = gs.moves_available();

            if gs.is_terminated() {
                let _ = gs.apply_action(GameAction::Restart);
            }
            if gs.won() {
                let _ = gs.apply_action(GameAction::KeepPlaying);
            }
        }
    });

    assert!(allocs == 0);
}
