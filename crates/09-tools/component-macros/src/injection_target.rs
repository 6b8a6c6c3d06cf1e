//! #[derive(InjectionTarget)] 实现

use crate::utils::{extract_generic_type, field_attribute, is_arc_type, is_option_type, named_or_indexed};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Member, Meta, Result};

/// 字段注入方式
enum InjectKind {
    /// `Option<Arc<T>>` 槽位
    Slot,
    /// 父级注入目标
    Parent,
}

fn inject_kind(field: &Field) -> Result<Option<InjectKind>> {
    let Some(attr) = field_attribute(field, "inject") else {
        return Ok(None);
    };

    if let Meta::Path(_) = attr.meta {
        return Ok(Some(InjectKind::Slot));
    }

    let mut kind = InjectKind::Slot;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parent") {
            kind = InjectKind::Parent;
            Ok(())
        } else {
            Err(meta.error("不支持的字段参数，可用参数: parent"))
        }
    })?;
    Ok(Some(kind))
}

fn is_entry_point(input: &DeriveInput) -> Result<bool> {
    let mut entry_point = false;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("entry_point") {
                entry_point = true;
                Ok(())
            } else {
                Err(meta.error("不支持的参数，可用参数: entry_point"))
            }
        })?;
    }
    Ok(entry_point)
}

// 槽位必须是 Option<Arc<T>>
fn validate_slot(field: &Field) -> Result<()> {
    let valid = is_option_type(&field.ty)
        && extract_generic_type(&field.ty).map(is_arc_type).unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(Error::new_spanned(&field.ty, "#[inject] 字段必须是 Option<Arc<T>>"))
    }
}

fn member_label(member: &Member) -> String {
    match member {
        Member::Named(ident) => ident.to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    }
}

/// 实现 #[derive(InjectionTarget)]
pub fn derive_injection_target_impl(input: DeriveInput) -> Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "#[derive(InjectionTarget)] 只能用于结构体",
            ))
        }
    };

    let name = &input.ident;
    let type_name = name.to_string();

    let mut slots = Vec::new();
    let mut parent: Option<Member> = None;

    for (index, field) in fields.iter().enumerate() {
        let member = named_or_indexed(field, index);
        match inject_kind(field)? {
            None => {}
            Some(InjectKind::Slot) => {
                validate_slot(field)?;
                let label = member_label(&member);
                slots.push(quote! {
                    points.push(::di_abstractions::InjectionPoint::new(#type_name, #label, &mut self.#member));
                });
            }
            Some(InjectKind::Parent) => {
                if parent.is_some() {
                    return Err(Error::new_spanned(field, "只能有一个 #[inject(parent)] 字段"));
                }
                parent = Some(member);
            }
        }
    }

    let parent_points = parent.map(|member| {
        quote! {
            points.extend(::di_abstractions::InjectionTarget::injection_points(&mut self.#member));
        }
    });

    let entry_point = is_entry_point(&input)?.then(|| {
        quote! {
            fn is_entry_point(&self) -> bool {
                true
            }
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::di_abstractions::InjectionTarget for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            #entry_point

            #[allow(unused_mut)]
            fn injection_points(&mut self) -> ::std::vec::Vec<::di_abstractions::InjectionPoint<'_>> {
                let mut points = ::std::vec::Vec::new();
                #(#slots)*
                #parent_points
                points
            }
        }
    })
}
