use std::env;

// Backends the harness can check. Exactly one is selected per build.
#[derive(PartialEq, Eq, Debug)]
struct Backend {
    name: &'static str,
    cfg_flag: &'static str,
    selected: bool,
}

impl Backend {
    fn backends() -> Vec<Backend> {
        vec![
            Backend {
                name: "neon",
                cfg_flag: "neon",
                selected: false,
            },
            Backend {
                name: "portable",
                cfg_flag: "portable",
                selected: false,
            },
        ]
    }
}

// Decides whether a backend can be used for the current target
trait BackendDetector {
    fn detect(&self, backends: &mut [Backend]);
}

// Hardware NEON: opt-in through the `native` feature, aarch64 targets only.
struct NativeDetector;
impl BackendDetector for NativeDetector {
    fn detect(&self, backends: &mut [Backend]) {
        let requested = env::var_os("CARGO_FEATURE_NATIVE").is_some();
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

        let available = arch == "aarch64" && features.split(',').any(|f| f == "neon");

        if requested && !available {
            println!(
                "cargo:warning=feature `native` needs an aarch64 target with neon, using the portable layer"
            );
        }

        for backend in backends.iter_mut() {
            if backend.name == "neon" {
                backend.selected = requested && available;
            }
        }
    }
}

struct BackendSelector;
impl BackendSelector {
    fn detectors() -> Vec<Box<dyn BackendDetector>> {
        vec![Box::new(NativeDetector)]
    }

    fn apply(backends: &mut [Backend]) {
        for detector in Self::detectors() {
            detector.detect(backends);
        }

        // The portable layer is the fallback when nothing else was selected
        let cfg_flag = backends
            .iter()
            .find(|backend| backend.selected)
            .map(|backend| backend.cfg_flag)
            .unwrap_or("portable");

        println!("cargo:rustc-cfg={cfg_flag}");

        for backend in backends.iter() {
            println!("cargo::rustc-check-cfg=cfg({})", backend.cfg_flag);
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut backends = Backend::backends();
    BackendSelector::apply(&mut backends);
}
