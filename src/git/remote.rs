use crate::error::{ReleasesError, Result};
use crate::git::TagSource;
use git2::{Cred, CredentialType, Direction, Remote, RemoteCallbacks};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::debug;

const TAG_REF_PREFIX: &str = "refs/tags/";
const PEELED_MARKER: &str = "^{}";

/// Tags advertised by a remote repository
///
/// Connects without a local clone, the way `git ls-remote --tags <url>`
/// does, and returns the advertised tag refs.
pub struct RemoteRepository {
    url: String,
}

impl RemoteRepository {
    pub fn new(url: impl Into<String>) -> Self {
        RemoteRepository { url: url.into() }
    }
}

const SSH_KEY_NAMES: [&str; 3] = ["id_ed25519", "id_rsa", "id_ecdsa"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum CredentialMethod {
    Username,
    SshKey(PathBuf),
    SshAgent,
    Default,
}

/// Credential methods not yet offered for one connection
///
/// libgit2 calls the credentials callback again after every rejected
/// credential, so each method is handed out at most once.
#[derive(Debug)]
struct CredentialAttempts {
    ssh_keys: VecDeque<PathBuf>,
    tried_username: bool,
    tried_agent: bool,
    tried_default: bool,
}

impl CredentialAttempts {
    /// Existing private keys under `<home>/.ssh`, in preference order
    fn from_home(home: Option<&Path>) -> Self {
        let ssh_keys = home
            .map(|home| {
                SSH_KEY_NAMES
                    .iter()
                    .map(|key| home.join(".ssh").join(key))
                    .filter(|path| path.exists())
                    .collect()
            })
            .unwrap_or_default();

        CredentialAttempts {
            ssh_keys,
            tried_username: false,
            tried_agent: false,
            tried_default: false,
        }
    }

    fn next(&mut self, allowed_types: CredentialType) -> Option<CredentialMethod> {
        if allowed_types.contains(CredentialType::USERNAME) && !self.tried_username {
            self.tried_username = true;
            return Some(CredentialMethod::Username);
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(path) = self.ssh_keys.pop_front() {
                return Some(CredentialMethod::SshKey(path));
            }
            if !self.tried_agent {
                self.tried_agent = true;
                return Some(CredentialMethod::SshAgent);
            }
        }

        if !self.tried_default {
            self.tried_default = true;
            return Some(CredentialMethod::Default);
        }

        None
    }
}

/// Credentials callback trying ssh keys from ~/.ssh, then the ssh agent,
/// then libgit2 defaults. Fails once every method has been rejected.
fn credentials_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut attempts = CredentialAttempts::from_home(dirs::home_dir().as_deref());
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        while let Some(method) = attempts.next(allowed_types) {
            let cred = match &method {
                CredentialMethod::Username => Cred::username(username),
                CredentialMethod::SshKey(path) => Cred::ssh_key(username, None, path, None),
                CredentialMethod::SshAgent => Cred::ssh_key_from_agent(username),
                CredentialMethod::Default => Cred::default(),
            };
            match cred {
                Ok(cred) => {
                    debug!(url, ?method, "offering credentials");
                    return Ok(cred);
                }
                Err(e) => debug!(url, ?method, error = %e.message(), "credentials unavailable"),
            }
        }

        Err(git2::Error::from_str(&format!(
            "no accepted credentials for '{}'",
            url
        )))
    });
    callbacks
}

/// Keep tag refs only; peeled `^{}` entries duplicate their annotated tag
fn is_listed_tag(ref_name: &str) -> bool {
    ref_name.starts_with(TAG_REF_PREFIX) && !ref_name.ends_with(PEELED_MARKER)
}

impl TagSource for RemoteRepository {
    fn tag_lines(&self) -> Result<Vec<String>> {
        let lookup_failed = |e: git2::Error| {
            ReleasesError::git_lookup(format!("Cannot list tags of '{}': {}", self.url, e.message()))
        };

        let mut remote = Remote::create_detached(self.url.as_str()).map_err(lookup_failed)?;
        let connection = remote
            .connect_auth(Direction::Fetch, Some(credentials_callbacks()), None)
            .map_err(lookup_failed)?;

        let lines: Vec<String> = connection
            .list()
            .map_err(lookup_failed)?
            .iter()
            .map(|head| head.name())
            .filter(|name| is_listed_tag(name))
            .map(|name| name.to_string())
            .collect();

        debug!(url = %self.url, count = lines.len(), "listed remote tags");

        Ok(lines)
    }
}
