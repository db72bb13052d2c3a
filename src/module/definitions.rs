//! Static definitions of the framework's modules.
//!
//! SDK-rooted modules live under `<framework_dir>/<sdk>`; library modules
//! live under `<framework_dir>/library`. Registration order follows the
//! catalog order below.

use super::{define, include, sources, Base, Module};

/// AT command tokenizer from the SDK.
pub static AT_TOK: Module = Module {
    name: "at_tok",
    label: "AT TOKENIZER",
    ops: &[
        include(Base::Sdk, &["lib", "at_tok"]),
        sources(Base::Sdk, &["lib", "at_tok"]),
    ],
};

/// Debug access port runner.
pub static DAP: Module = Module {
    name: "dap",
    label: "DAP",
    ops: &[
        include(Base::Framework, &["library", "dap"]),
        sources(Base::Framework, &["library", "dap"]),
    ],
};

/// Arduino-style wiring layer. Headers and sources live in separate
/// directories, so the include path and the source group differ.
pub static WIRING: Module = Module {
    name: "wiring",
    label: "WIRING",
    ops: &[
        include(Base::Framework, &["library", "wiring", "include"]),
        sources(Base::Framework, &["library", "wiring", "src"]),
    ],
};

/// Virtual filesystem layer (FatFs and LittleFS backends).
pub static VFS: Module = Module {
    name: "vfs",
    label: "VFS",
    ops: &[
        include(Base::Framework, &["library", "VFS"]),
        define("PICO_VFS"),
        sources(Base::Framework, &["library", "VFS"]),
    ],
};

/// TFT display HAL.
pub static HAL_TFT: Module = Module {
    name: "hal_tft",
    label: "HAL TFT",
    ops: &[
        include(Base::Framework, &["library", "hal_tft"]),
        sources(Base::Framework, &["library", "hal_tft"]),
    ],
};

/// All modules, in registration order.
pub static MODULES: &[&Module] = &[&AT_TOK, &DAP, &WIRING, &VFS, &HAL_TFT];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Op;

    #[test]
    fn module_names_are_unique() {
        let mut names = std::collections::HashSet::new();
        for module in MODULES {
            assert!(names.insert(module.name), "duplicate module: {}", module.name);
        }
    }

    #[test]
    fn every_module_registers_sources() {
        for module in MODULES {
            assert!(
                module.ops.iter().any(|op| matches!(op, Op::Sources(_, _))),
                "module '{}' registers no sources",
                module.name
            );
        }
    }

    #[test]
    fn every_module_contributes_an_include_path() {
        for module in MODULES {
            assert!(
                module.ops.iter().any(|op| matches!(op, Op::Include(_, _))),
                "module '{}' contributes no include path",
                module.name
            );
        }
    }
}
