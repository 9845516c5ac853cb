//! Crate not intended for direct use.
//! Use `::thread_gen` instead.
#![allow(nonstandard_style, unused_imports)]

use ::core::{
    ops::Not as _,
};
use ::proc_macro::{
    TokenStream,
};
use ::proc_macro2::{
    TokenStream as TokenStream2,
};
use ::quote::{
    quote,
    ToTokens,
};
use ::syn::{*,
    parse::{Parse, ParseStream},
    Result, // Explicitly shadow it
};

mod kw {
    ::syn::custom_keyword!(resume);
}

#[proc_macro_attribute] pub
fn generator (
    attrs: TokenStream,
    input: TokenStream,
) -> TokenStream
{
    generator_impl(attrs.into(), input.into())
        .unwrap_or_else(|err| {
            let mut errors =
                err .into_iter()
                    .map(|err| Error::new(
                        err.span(),
                        format_args!("`#[thread_gen::generator]`: {}", err),
                    ))
            ;
            let mut err = match errors.next() {
                | Some(err) => err,
                | None => return TokenStream2::new(),
            };
            errors.for_each(|cur| err.combine(cur));
            err.to_compile_error()
        })
        .into()
}

/// `#[generator(T)]`, `#[generator(yield(T))]`,
/// or `#[generator(yield(T), resume(A))]` (in any order).
struct Params {
    yield_type: Type,
    resume_type: Option<Type>,
}

impl Parse for Params {
    fn parse (input: ParseStream<'_>)
      -> Result<Self>
    {
        if input.is_empty() {
            return Err(input.error(
                "missing yield type, e.g., `#[generator(yield(u8))]`",
            ));
        }
        if input.peek(Token![yield]).not() && input.peek(kw::resume).not() {
            return Ok(Self {
                yield_type: input.parse()?,
                resume_type: None,
            });
        }
        let mut yield_type = None;
        let mut resume_type = None;
        loop {
            let lookahead = input.lookahead1();
            if lookahead.peek(Token![yield]) {
                let keyword: Token![yield] = input.parse()?;
                let ty = parenthesized_type(input)?;
                if yield_type.replace(ty).is_some() {
                    return Err(Error::new_spanned(keyword, "duplicate `yield(…)`"));
                }
            } else if lookahead.peek(kw::resume) {
                let keyword: kw::resume = input.parse()?;
                let ty = parenthesized_type(input)?;
                if resume_type.replace(ty).is_some() {
                    return Err(Error::new_spanned(keyword, "duplicate `resume(…)`"));
                }
            } else {
                return Err(lookahead.error());
            }
            if input.is_empty() {
                break;
            }
            let _: Token![,] = input.parse()?;
            if input.is_empty() {
                break;
            }
        }
        match yield_type {
            | Some(yield_type) => Ok(Self { yield_type, resume_type }),
            | None => Err(input.error("missing `yield(…)` type")),
        }
    }
}

fn parenthesized_type (input: ParseStream<'_>)
  -> Result<Type>
{
    let contents;
    parenthesized!(contents in input);
    contents.parse()
}

fn generator_impl (
    params: TokenStream2,
    input: TokenStream2,
) -> Result<TokenStream2>
{
    let Params { yield_type, resume_type } = parse2(params)?;
    let resume_type = resume_type.unwrap_or_else(|| parse_quote!( () ));

    let mut function: ItemFn = parse2(input)?;
    let ItemFn {
        ref mut block,
        ref mut sig,
        ..
    } = function;

    if let Some(ref asyncness) = sig.asyncness {
        return Err(Error::new_spanned(
            asyncness,
            "`async fn`s are not supported",
        ));
    }
    if let Some(receiver) =
        sig .inputs
            .iter()
            .find(|&fn_arg| matches!(*fn_arg, FnArg::Receiver(_)))
    {
        return Err(Error::new_spanned(
            receiver,
            "`self` receivers are not supported yet",
        ));
    }

    // Handle the signature: the function now returns the generator.
    let return_type: Type = match sig.output {
        | ReturnType::Default => parse_quote!( () ),
        | ReturnType::Type(_, ref ty) => (**ty).clone(),
    };
    sig.output = parse_quote!(
        -> ::thread_gen::Coroutine<#yield_type, #return_type, #resume_type>
    );

    // Update block to run as the body, with a `yield_!` macro in scope.
    // The arguments are captured by the `move` closure.
    *block = parse_quote!({
        ::thread_gen::Coroutine::<#yield_type, #return_type, #resume_type>::new(move |
            __yielder__: ::thread_gen::Yielder<'_, #yield_type, #resume_type>,
        | -> #return_type {
            #[allow(unused_macros)]
            macro_rules! yield_ {(
                $value:expr $(,)?
            ) => (
                __yielder__.yield_($value)
            )}

            #block
        })
    });

    Ok(function.into_token_stream())
}
