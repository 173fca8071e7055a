/// Ripple keyframes plus the narrow-viewport override that turns off the tag
/// pulse and the magnetic button shift.
pub const SUPPLEMENTAL_CSS: &str = r#"
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.3);
        transform: scale(0);
        animation: ripple-animation 0.6s linear;
        pointer-events: none;
    }

    .button-ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.4);
        transform: scale(0);
        animation: button-ripple-animation 0.8s linear;
        pointer-events: none;
    }

    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    @keyframes button-ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    @media (max-width: 768px) {
        .tag {
            animation: none !important;
        }

        .btn-primary {
            transform: none !important;
        }
    }
"#;
