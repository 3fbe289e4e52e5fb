//! Ambient library bindings seeded into the global scope.
//!
//! Each preset is the union of its layers; `browser` and `node` build on
//! `es2022`.

use crate::binding::Meaning;
use tsscope_options::GlobalPreset;

struct Layer {
    values: &'static [&'static str],
    types: &'static [&'static str],
    both: &'static [&'static str],
}

const ES5: Layer = Layer {
    values: &[
        "NaN",
        "Infinity",
        "undefined",
        "eval",
        "parseInt",
        "parseFloat",
        "isNaN",
        "isFinite",
        "decodeURI",
        "decodeURIComponent",
        "encodeURI",
        "encodeURIComponent",
        "escape",
        "unescape",
    ],
    types: &[
        "PropertyKey",
        "PropertyDescriptor",
        "PropertyDescriptorMap",
        "IArguments",
        "ArrayLike",
        "ReadonlyArray",
        "ConcatArray",
        "TemplateStringsArray",
        "TypedPropertyDescriptor",
        "PromiseLike",
        "CallableFunction",
        "NewableFunction",
        "ClassDecorator",
        "PropertyDecorator",
        "MethodDecorator",
        "ParameterDecorator",
        "Partial",
        "Required",
        "Readonly",
        "Pick",
        "Record",
        "Exclude",
        "Extract",
        "Omit",
        "NonNullable",
        "Parameters",
        "ConstructorParameters",
        "ReturnType",
        "InstanceType",
        "ThisParameterType",
        "OmitThisParameter",
        "ThisType",
        "Awaited",
        "Uppercase",
        "Lowercase",
        "Capitalize",
        "Uncapitalize",
    ],
    both: &[
        "Object",
        "Function",
        "Array",
        "String",
        "Boolean",
        "Number",
        "Date",
        "RegExp",
        "Error",
        "EvalError",
        "RangeError",
        "ReferenceError",
        "SyntaxError",
        "TypeError",
        "URIError",
        "Math",
        "JSON",
    ],
};

const ES2015: Layer = Layer {
    values: &["Reflect"],
    types: &[
        "Iterable",
        "Iterator",
        "IterableIterator",
        "IteratorResult",
        "Generator",
        "ReadonlyMap",
        "ReadonlySet",
        "PromiseConstructorLike",
        "ArrayBufferLike",
        "ProxyHandler",
    ],
    both: &[
        "Map",
        "Set",
        "WeakMap",
        "WeakSet",
        "Promise",
        "Symbol",
        "Proxy",
        "GeneratorFunction",
        "ArrayBuffer",
        "DataView",
        "Int8Array",
        "Uint8Array",
        "Uint8ClampedArray",
        "Int16Array",
        "Uint16Array",
        "Int32Array",
        "Uint32Array",
        "Float32Array",
        "Float64Array",
    ],
};

const ES2020: Layer = Layer {
    values: &["globalThis"],
    types: &["AsyncIterable", "AsyncIterator", "AsyncIterableIterator", "AsyncGenerator"],
    both: &["BigInt", "BigInt64Array", "BigUint64Array", "SharedArrayBuffer", "Atomics"],
};

const ES2022: Layer = Layer {
    values: &[],
    types: &["ErrorOptions"],
    both: &["WeakRef", "FinalizationRegistry", "AggregateError"],
};

const DOM: Layer = Layer {
    values: &[
        "window",
        "self",
        "document",
        "navigator",
        "location",
        "history",
        "localStorage",
        "sessionStorage",
        "console",
        "fetch",
        "alert",
        "setTimeout",
        "clearTimeout",
        "setInterval",
        "clearInterval",
        "requestAnimationFrame",
        "cancelAnimationFrame",
        "queueMicrotask",
        "structuredClone",
    ],
    types: &["HTMLElementTagNameMap", "EventListener", "EventListenerOrEventListenerObject", "RequestInit"],
    both: &[
        "Window",
        "Document",
        "Node",
        "Element",
        "HTMLElement",
        "Event",
        "EventTarget",
        "KeyboardEvent",
        "MouseEvent",
        "URL",
        "URLSearchParams",
        "Headers",
        "Request",
        "Response",
        "Blob",
        "File",
        "FormData",
        "WebSocket",
        "Worker",
        "XMLHttpRequest",
        "AbortController",
        "AbortSignal",
        "TextEncoder",
        "TextDecoder",
    ],
};

const NODE: Layer = Layer {
    values: &[
        "process",
        "require",
        "module",
        "exports",
        "__dirname",
        "__filename",
        "global",
        "console",
        "setTimeout",
        "clearTimeout",
        "setInterval",
        "clearInterval",
        "setImmediate",
        "clearImmediate",
        "queueMicrotask",
        "structuredClone",
    ],
    types: &["NodeJS", "NodeRequire", "NodeModule"],
    both: &[
        "Buffer",
        "URL",
        "URLSearchParams",
        "TextEncoder",
        "TextDecoder",
        "AbortController",
        "AbortSignal",
    ],
};

fn layers(preset: GlobalPreset) -> &'static [&'static Layer] {
    match preset {
        GlobalPreset::None => &[],
        GlobalPreset::Es5 => &[&ES5],
        GlobalPreset::Es2015 => &[&ES5, &ES2015],
        GlobalPreset::Es2020 => &[&ES5, &ES2015, &ES2020],
        GlobalPreset::Es2022 => &[&ES5, &ES2015, &ES2020, &ES2022],
        GlobalPreset::Browser => &[&ES5, &ES2015, &ES2020, &ES2022, &DOM],
        GlobalPreset::Node => &[&ES5, &ES2015, &ES2020, &ES2022, &NODE],
    }
}

/// Every global a preset declares, with the meanings it has. A name can
/// appear more than once across layers; callers union the meanings.
pub fn preset_globals(preset: GlobalPreset) -> impl Iterator<Item = (&'static str, Meaning)> {
    layers(preset).iter().flat_map(|layer| {
        let values = layer.values.iter().map(|name| (*name, Meaning::VALUE));
        let types = layer.types.iter().map(|name| (*name, Meaning::TYPE));
        let both = layer.both.iter().map(|name| (*name, Meaning::BOTH));
        values.chain(types).chain(both)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meaning_of(preset: GlobalPreset, name: &str) -> Option<Meaning> {
        preset_globals(preset)
            .filter(|(n, _)| *n == name)
            .map(|(_, m)| m)
            .reduce(|a, b| a | b)
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(preset_globals(GlobalPreset::None).count(), 0);
    }

    #[test]
    fn test_presets_are_cumulative() {
        assert_eq!(meaning_of(GlobalPreset::Es5, "Promise"), None);
        assert_eq!(meaning_of(GlobalPreset::Es2015, "Promise"), Some(Meaning::BOTH));
        assert_eq!(meaning_of(GlobalPreset::Es2022, "Array"), Some(Meaning::BOTH));
        assert_eq!(meaning_of(GlobalPreset::Es2020, "globalThis"), Some(Meaning::VALUE));
        assert_eq!(meaning_of(GlobalPreset::Es5, "Partial"), Some(Meaning::TYPE));
    }

    #[test]
    fn test_host_presets() {
        assert_eq!(meaning_of(GlobalPreset::Browser, "document"), Some(Meaning::VALUE));
        assert_eq!(meaning_of(GlobalPreset::Browser, "process"), None);
        assert_eq!(meaning_of(GlobalPreset::Node, "process"), Some(Meaning::VALUE));
        assert_eq!(meaning_of(GlobalPreset::Node, "Map"), Some(Meaning::BOTH));
    }
}
