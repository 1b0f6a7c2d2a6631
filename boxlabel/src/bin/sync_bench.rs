use boxlabel::{Bounds, Controller, ControllerConfig, InitialRegion, MemorySurface, MountArgs, RenderSurface};
use std::time::Instant;

fn build_grid(regions: usize) -> Vec<InitialRegion<String>> {
    let w = 100usize;
    (0..regions)
        .map(|i| {
            let (cx, cy) = ((i % w) as f32, (i / w) as f32);
            InitialRegion::new(Bounds::new(cx * 12.0, cy * 9.0, 10.0, 7.0), format!("r{}", i))
        })
        .collect()
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut regions = 2000usize;
    let mut edits = 2000usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--regions=") { if let Ok(v)=val.parse() { regions=v; } }
        else if let Some(val)=a.strip_prefix("--edits=") { if let Ok(v)=val.parse() { edits=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let mount = MountArgs::new(1200, 900, build_grid(regions));
    let mut c = Controller::mount(MemorySurface::new(), mount, ControllerConfig::default());
    let handles = c.surface().objects();
    if handles.is_empty() { println!("regions=0"); return; }

    // Each edit nudges one rectangle and re-synchronizes the whole set
    let mut times_ms: Vec<f64> = Vec::with_capacity(edits);
    let start_all = Instant::now();
    let mut synced = 0usize;
    for k in 0..edits {
        let h = handles[k % handles.len()];
        c.surface_mut().translate(h, 0.5, -0.5);
        let t0 = Instant::now();
        if c.object_modified(h).is_synced() { synced += 1; }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("regions={} edits={} synced={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", regions, edits, synced, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
