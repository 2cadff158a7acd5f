//! Integration tests for the jCard codec and vCard 3.0 serializer.
