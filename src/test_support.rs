//! Shared fixtures for unit tests.

use crate::confirm::ResponseSource;
use crate::error::Result;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Output the fake pip prints for `pip freeze`.
pub(crate) const FAKE_FREEZE_OUTPUT: &str = "requests==2.31.0\nurllib3==2.2.1\n";

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Build the sample tree most scanner and sweep tests run against:
///
/// ```text
/// project1/.venv/                     venv
/// project1/__pycache__/
/// project1/app.py
/// project2/venv/                      venv
/// project2/submodule/__pycache__/
/// project2/node_modules/left-pad/node_modules/inner/
/// docs/readme.md
/// ```
pub(crate) fn create_sample_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    create_fake_venv(&root.join("project1").join(".venv"));
    write_file(&root.join("project1/__pycache__/app.cpython-312.pyc"), "");
    write_file(&root.join("project1/app.py"), "print('hello')\n");

    create_fake_venv(&root.join("project2").join("venv"));
    write_file(
        &root.join("project2/submodule/__pycache__/util.cpython-312.pyc"),
        "",
    );
    write_file(&root.join("project2/submodule/util.py"), "");
    write_file(
        &root.join("project2/node_modules/left-pad/node_modules/inner/index.js"),
        "module.exports = {};\n",
    );
    write_file(
        &root.join("project2/node_modules/left-pad/index.js"),
        "module.exports = {};\n",
    );

    write_file(&root.join("docs/readme.md"), "# Docs\n");

    temp_dir
}

/// Create a minimal POSIX-layout venv whose `pip freeze` prints
/// [`FAKE_FREEZE_OUTPUT`].
pub(crate) fn create_fake_venv(venv: &Path) {
    write_file(&venv.join("bin/activate"), "# activate\n");
    write_file(&venv.join("pyvenv.cfg"), "home = /usr/bin\n");
    write_script(
        &venv.join("bin/pip"),
        &format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"freeze\" ]; then\n\
             printf '{}'\n\
             exit 0\n\
             fi\n\
             echo \"unknown command: $1\" >&2\n\
             exit 2\n",
            FAKE_FREEZE_OUTPUT.replace('\n', "\\n")
        ),
    );
}

/// Write an executable script.
pub(crate) fn write_script(path: &Path, body: &str) {
    write_file(path, body);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

pub(crate) fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Replays a fixed list of answers to confirmation prompts.
#[derive(Debug, Default)]
pub(crate) struct ScriptedResponses {
    answers: VecDeque<String>,
    /// Every question asked, in order.
    pub(crate) asked: Vec<String>,
}

impl ScriptedResponses {
    pub(crate) fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

impl ResponseSource for ScriptedResponses {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front())
    }
}
