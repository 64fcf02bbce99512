use mcp_maker_core::{File, ProjectLayout, Result};
use serde_json::json;

use crate::Renderer;

/// An authentication scheme and the files implementing it.
#[derive(Debug, Clone, Copy)]
pub struct AuthScheme {
    pub name: &'static str,
    pub interface: &'static str,
    pub provider: &'static str,
}

pub const AUTH_SCHEMES: [AuthScheme; 3] = [
    AuthScheme {
        name: "basic",
        interface: "IBasicAuthProvider",
        provider: "BasicAuthProvider",
    },
    AuthScheme {
        name: "token",
        interface: "ITokenAuthProvider",
        provider: "TokenAuthProvider",
    },
    AuthScheme {
        name: "oauth",
        interface: "IOAuthProvider",
        provider: "OAuthProvider",
    },
];

/// Every file of `src/auth`, relative to the project root.
pub fn auth_files(renderer: &Renderer) -> Result<Vec<File>> {
    let auth = ProjectLayout::AUTH;
    let data = json!({});
    let mut files = vec![File::new(
        format!("{auth}/interfaces/IAuthProvider.ts"),
        renderer.render("auth/interfaces/IAuthProvider.ts", &data)?,
    )];

    let mut interfaces_index = String::from("export * from \"./IAuthProvider.js\";\n");
    let mut methods_index = String::new();
    for scheme in &AUTH_SCHEMES {
        files.push(File::new(
            format!("{auth}/interfaces/{}.ts", scheme.interface),
            renderer.render(&format!("auth/interfaces/{}.ts", scheme.interface), &data)?,
        ));
        files.push(File::new(
            format!("{auth}/methods/{}.ts", scheme.provider),
            renderer.render(&format!("auth/methods/{}.ts", scheme.provider), &data)?,
        ));
        interfaces_index.push_str(&format!("export * from \"./{}.js\";\n", scheme.interface));
        methods_index.push_str(&format!("export * from \"./{}.js\";\n", scheme.provider));
    }

    files.push(File::new(
        format!("{auth}/interfaces/index.ts"),
        interfaces_index,
    ));
    files.push(File::new(format!("{auth}/methods/index.ts"), methods_index));
    for name in ["AuthFactory", "AuthService", "index"] {
        files.push(File::new(
            format!("{auth}/{name}.ts"),
            renderer.render(&format!("auth/{name}.ts"), &data)?,
        ));
    }
    Ok(files)
}
