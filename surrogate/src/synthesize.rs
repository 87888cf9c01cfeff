//! Catch-all synthesis.

use surrogate_core::{
    CATCH_ALL, GeneratedCallSurface, GeneratedMember, GenerationError, TypeDescriptor,
};

/// Synthesize the catch-all member routing the given magic names.
///
/// The member may only be installed into a free, overridable slot: a target
/// that seals its catch-all makes this a fatal configuration error rather
/// than a silent skip.
pub fn synthesize_catch_all(
    descriptor: &TypeDescriptor,
    magic: &[String],
) -> Result<GeneratedMember, GenerationError> {
    if descriptor.is_sealed(CATCH_ALL) {
        return Err(GenerationError::SealedSlot {
            type_name: descriptor.type_name().to_owned(),
            method: CATCH_ALL.to_owned(),
        });
    }
    let surface = GeneratedCallSurface::new(magic.iter().cloned());
    Ok(GeneratedMember::catch_all(surface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrogate_core::CallStep;

    #[test]
    fn member_carries_surface_and_body_steps() {
        let descriptor = TypeDescriptor::new("Gadget").with_methods(["firstMethod"]);
        let member =
            synthesize_catch_all(&descriptor, &["thirdMethod".to_owned()]).unwrap();
        assert_eq!(member.name(), CATCH_ALL);
        assert_eq!(member.params(), ["name", "arguments"]);
        assert!(member.surface().permits("thirdMethod"));
        assert_eq!(
            member.body(),
            [CallStep::Validate, CallStep::DelegateOrFail, CallStep::Intercept]
        );
    }

    #[test]
    fn sealed_slot_is_a_generation_error() {
        let descriptor = TypeDescriptor::new("SealedGadget").with_sealed([CATCH_ALL]);
        let err = synthesize_catch_all(&descriptor, &["thirdMethod".to_owned()]).unwrap_err();
        assert!(matches!(err, GenerationError::SealedSlot { .. }));
    }
}
