//! Built-in language tables.
//!
//! Pure data: the resolver copies these into lookup maps once per process.
//! Grammar ids follow the tree-sitter grammar naming, so some of them (`c_sharp`)
//! need an alias before they reach the grammar registry.

/// Conventional file names that carry no usable extension.
///
/// Matched case-insensitively against the whole file name, before extensions.
pub(crate) const FILENAMES: &[(&str, &str)] = &[
    ("dockerfile", "dockerfile"),
    ("containerfile", "dockerfile"),
    ("cmakelists.txt", "cmake"),
    ("makefile", "make"),
    ("gnumakefile", "make"),
    ("justfile", "just"),
    ("gemfile", "ruby"),
    ("rakefile", "ruby"),
    ("cargo.lock", "toml"),
    (".gitignore", "gitignore"),
    (".gitattributes", "gitattributes"),
    (".bashrc", "bash"),
    (".zshrc", "bash"),
];

/// File extension (without the dot) to grammar id.
///
/// Matched case-sensitively first, so `C` and `R` can differ from `c` and `r`.
pub(crate) const EXTENSIONS: &[(&str, &str)] = &[
    ("java", "java"),
    ("py", "python"),
    ("pyw", "python"),
    ("js", "javascript"),
    ("cjs", "javascript"),
    ("njs", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("ts", "typescript"),
    ("tsx", "tsx"),
    ("go", "go"),
    ("c", "cpp"),
    ("h", "cpp"),
    ("c++", "cpp"),
    ("cpp", "cpp"),
    ("cxx", "cpp"),
    ("cc", "cpp"),
    ("cp", "cpp"),
    ("C", "cpp"),
    ("h++", "cpp"),
    ("hpp", "cpp"),
    ("hxx", "cpp"),
    ("xml", "xml"),
    ("xsl", "xml"),
    ("xslt", "xml"),
    ("xsd", "xml"),
    ("xaml", "xml"),
    ("html", "html"),
    ("xhtml", "html"),
    ("htm", "html"),
    ("sql", "sql"),
    ("sqlite", "sqlite"),
    ("php", "php"),
    ("phtml", "php"),
    ("kotlin", "kotlin"),
    ("kt", "kotlin"),
    ("kts", "kotlin"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("cs", "c_sharp"),
    ("csx", "c_sharp"),
    ("css", "css"),
    ("scss", "scss"),
    ("less", "less"),
    ("vue", "vue"),
    ("svelte", "svelte"),
    ("ada", "ada"),
    ("adb", "ada"),
    ("ads", "ada"),
    ("agda", "agda"),
    ("cls", "apex"),
    ("sh", "bash"),
    ("bash", "bash"),
    ("beancount", "beancount"),
    ("capnp", "capnp"),
    ("clj", "clojure"),
    ("cljs", "clojure"),
    ("cljc", "clojure"),
    ("cmake", "cmake"),
    ("lisp", "commonlisp"),
    ("lsp", "commonlisp"),
    ("cu", "cuda"),
    ("cuh", "cuda"),
    ("dart", "dart"),
    ("d", "d"),
    ("di", "d"),
    ("dockerfile", "dockerfile"),
    ("dot", "dot"),
    ("ex", "elixir"),
    ("exs", "elixir"),
    ("elm", "elm"),
    ("el", "elisp"),
    ("erb", "embedded_template"),
    ("ejs", "embedded_template"),
    ("erl", "erlang"),
    ("hrl", "erlang"),
    ("fnl", "fennel"),
    ("fish", "fish"),
    ("f", "formula"),
    ("frm", "formula"),
    ("f90", "fortran"),
    ("f95", "fortran"),
    ("f03", "fortran"),
    ("f08", "fortran"),
    ("for", "fortran"),
    ("gitattributes", "gitattributes"),
    ("gitignore", "gitignore"),
    ("gleam", "gleam"),
    ("glsl", "glsl"),
    ("vert", "glsl"),
    ("frag", "glsl"),
    ("graphql", "graphql"),
    ("hack", "hack"),
    ("hh", "hack"),
    ("hhi", "hack"),
    ("hs", "haskell"),
    ("lhs", "haskell"),
    ("hcl", "hcl"),
    ("ispc", "ispc"),
    ("jq", "jq"),
    ("json", "json"),
    ("json5", "json5"),
    ("jl", "julia"),
    ("just", "just"),
    ("lalrpop", "lalrpop"),
    ("tex", "latex"),
    ("sty", "latex"),
    ("lean", "lean"),
    ("ll", "llvm"),
    ("bc", "llvm"),
    ("td", "tablegen"),
    ("lua", "lua"),
    ("magik", "magik"),
    ("make", "make"),
    ("mk", "make"),
    ("md", "markdown"),
    ("meson", "meson"),
    ("m68k", "m68k"),
    ("nim", "nim"),
    ("nix", "nix"),
    ("noir", "noir"),
    ("objc", "objc"),
    ("ml", "ocaml"),
    ("mli", "ocaml"),
    ("odin", "odin"),
    ("org", "org"),
    ("p4", "p4"),
    ("pas", "pascal"),
    ("pl", "perl"),
    ("pgn", "pgn"),
    ("ps1", "powershell"),
    ("psm1", "powershell"),
    ("proto", "proto"),
    ("qmljs", "qmljs"),
    ("qc", "quakec"),
    ("rkt", "racket"),
    ("rasi", "rasi"),
    ("re2c", "re2c"),
    ("regex", "regex"),
    ("rego", "rego"),
    ("rst", "rst"),
    ("r", "r"),
    ("R", "r"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("robot", "robot"),
    ("scm", "scheme"),
    ("smali", "smali"),
    ("sp", "sourcepawn"),
    ("sparql", "sparql"),
    ("sc", "supercollider"),
    ("tact", "tact"),
    ("thrift", "thrift"),
    ("toml", "toml"),
    ("ttl", "turtle"),
    ("ungrammar", "ungrammar"),
    ("usd", "usd"),
    ("v", "verilog"),
    ("vh", "verilog"),
    ("sv", "verilog"),
    ("svh", "verilog"),
    ("vhdl", "vhdl"),
    ("wasm", "wast"),
    ("wat", "wast"),
    ("wast", "wast"),
    ("wdl", "wdl"),
    ("wgsl", "wgsl"),
    ("yang", "yang"),
    ("yuck", "yuck"),
    ("zig", "zig"),
    ("zig_test", "zig"),
];

/// Grammar ids that differ between the extension table and the grammar registry.
pub(crate) const ALIASES: &[(&str, &str)] = &[("c_sharp", "csharp")];
