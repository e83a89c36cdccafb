//! Markdown body posted on pull requests with unsigned commits.

use crate::commit::Commit;

pub const FOOTER: &str = "#### ✅ Why it is required
The Developer Certificate of Origin (DCO) is a lightweight way for contributors to certify that they wrote or otherwise have the right to submit the code they are contributing to the project. Here is the full [text of the DCO](https://developercertificate.org/).

Contributors _sign-off_ that they adhere to these requirements by adding a `Signed-off-by` line to commit messages.

```
This is my commit message

Signed-off-by: Random Developer <randomdeveloper@example.com>
```

Git even has a `-s` command line option to append this automatically to your commit message:

```
$ git commit -s -m 'This is my commit message'
```";

pub fn header(author: &str, unsigned: usize) -> String {
    format!(
        "⚠️  @{author} the `signed-off-by` was not found in the following **{unsigned}** commits:"
    )
}

/// Header, one bullet per unsigned commit, then [`FOOTER`].
/// Returns an empty string when every commit is signed off.
pub fn render(author: &str, unsigned: &[Commit]) -> String {
    if unsigned.is_empty() {
        return String::new();
    }

    let bullets = unsigned
        .iter()
        .map(|c| format!("- {}: {}", c.url, c.subject()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{bullets}\n\n{FOOTER}", header(author, unsigned.len()))
}
