//! #[derive(Injectable)] 实现

use crate::utils::{field_attribute, is_arc_type, named_or_indexed};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    punctuated::Punctuated, Data, DeriveInput, Error, Fields, Meta, Result, Token,
};

/// 可注入组件参数
#[derive(Debug, Clone, Default)]
pub struct InjectableArgs {
    /// 是否为单例
    pub singleton: bool,
}

impl InjectableArgs {
    /// 从结构体上的 `#[injectable(...)]` 属性解析
    pub fn from_attributes(input: &DeriveInput) -> Result<Self> {
        let mut args = InjectableArgs::default();

        for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("injectable")) {
            let parsed = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            for meta in parsed {
                match meta {
                    Meta::Path(path) if path.is_ident("singleton") => args.singleton = true,
                    Meta::Path(path) if path.is_ident("transient") => args.singleton = false,
                    other => {
                        return Err(Error::new_spanned(
                            other,
                            "不支持的参数，可用参数: singleton, transient",
                        ))
                    }
                }
            }
        }

        Ok(args)
    }
}

/// 字段在构造函数中的角色
enum FieldRole {
    /// 由容器解析的依赖
    Dependency,
    /// 使用 `Default::default()` 初始化
    Default,
}

fn field_role(field: &syn::Field) -> Result<FieldRole> {
    let Some(attr) = field_attribute(field, "injectable") else {
        return Ok(FieldRole::Dependency);
    };

    let mut role = FieldRole::Dependency;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("default") {
            role = FieldRole::Default;
            Ok(())
        } else {
            Err(meta.error("不支持的字段参数，可用参数: default"))
        }
    })?;
    Ok(role)
}

/// 实现 #[derive(Injectable)]
pub fn derive_injectable_impl(input: DeriveInput) -> Result<TokenStream> {
    let args = InjectableArgs::from_attributes(&input)?;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "#[derive(Injectable)] 只能用于结构体",
            ))
        }
    };

    let mut dependency_types = Vec::new();
    let mut bindings = Vec::new();
    let mut initializers = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let member = named_or_indexed(field, index);
        match field_role(field)? {
            FieldRole::Default => {
                initializers.push(quote! { #member: ::core::default::Default::default() });
            }
            FieldRole::Dependency => {
                if !is_arc_type(&field.ty) {
                    return Err(Error::new_spanned(
                        &field.ty,
                        "可注入字段必须是 Arc<T>，其它字段请标记 #[injectable(default)]",
                    ));
                }
                let binding = format_ident!("__dependency_{}", index);
                let ty = &field.ty;
                dependency_types.push(quote! { #ty });
                initializers.push(quote! { #member: #binding });
                bindings.push(binding);
            }
        }
    }

    let construct_body = match fields {
        Fields::Unit => quote! { Self },
        _ => quote! { Self { #(#initializers),* } },
    };

    let lifetime = if args.singleton {
        quote! { ::di_abstractions::Lifetime::Singleton }
    } else {
        quote! { ::di_abstractions::Lifetime::Transient }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable for #name #ty_generics #where_clause {
            const LIFETIME: ::di_abstractions::Lifetime = #lifetime;

            type Dependencies = ( #(#dependency_types,)* );

            fn construct(
                dependencies: Self::Dependencies,
            ) -> ::core::result::Result<Self, ::di_abstractions::BoxError> {
                let ( #(#bindings,)* ) = dependencies;
                ::core::result::Result::Ok(#construct_body)
            }
        }
    })
}
