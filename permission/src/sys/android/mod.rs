//! Android permission implementation using JNI.
//!
//! The runtime-permission logic lives in `PermissionHelper.kt`, compiled to
//! DEX at build time and loaded through an in-process class loader. All entry
//! points need an Activity context; without one the plain API degrades to
//! `Unknown`.

use crate::{Permission, PermissionError, PermissionStatus};
use jni::JNIEnv;
use jni::objects::{GlobalRef, JClass, JObject, JValue};
use jni::sys::jint;
use std::sync::OnceLock;

/// Embedded DEX bytecode containing the PermissionHelper class.
/// Generated at build time by kotlinc + D8.
static DEX_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/classes.dex"));

/// Cached class loader for the embedded DEX.
static CLASS_LOADER: OnceLock<GlobalRef> = OnceLock::new();

const HELPER_CLASS: &str = "blekit.permission.PermissionHelper";

/// Domain constants (must match Kotlin).
const DOMAIN_BLUETOOTH: jint = 0;
const DOMAIN_LOCATION: jint = 1;
const DOMAIN_CAMERA: jint = 2;
const DOMAIN_PHOTO_LIBRARY: jint = 3;
const DOMAIN_MICROPHONE: jint = 4;

const fn domain_to_jint(permission: Permission) -> jint {
    match permission {
        Permission::Bluetooth => DOMAIN_BLUETOOTH,
        Permission::Location => DOMAIN_LOCATION,
        Permission::Camera => DOMAIN_CAMERA,
        Permission::PhotoLibrary => DOMAIN_PHOTO_LIBRARY,
        Permission::Microphone => DOMAIN_MICROPHONE,
    }
}

/// Initialize the DEX class loader. Must be called with a valid Activity
/// context before the helper class can be resolved.
fn init_with_activity(env: &mut JNIEnv, activity: &JObject) -> Result<(), PermissionError> {
    if CLASS_LOADER.get().is_some() {
        return Ok(());
    }

    // Write the embedded DEX into the app cache so DexClassLoader can map it
    let cache_dir = env
        .call_method(activity, "getCacheDir", "()Ljava/io/File;", &[])
        .and_then(|v| v.l())
        .map_err(|e| PermissionError::Unknown(format!("getCacheDir failed: {e}")))?;

    let cache_path = env
        .call_method(&cache_dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .map_err(|e| PermissionError::Unknown(format!("getAbsolutePath failed: {e}")))?;

    let cache_path_str = env
        .get_string((&cache_path).into())
        .map_err(|e| PermissionError::Unknown(format!("get_string failed: {e}")))?
        .to_str()
        .map_err(|e| PermissionError::Unknown(format!("to_str failed: {e}")))?
        .to_owned();

    let dex_path = format!("{cache_path_str}/blekit_permission.dex");
    log::info!("Writing permission DEX to {dex_path}");
    std::fs::write(&dex_path, DEX_BYTES)
        .map_err(|e| PermissionError::Unknown(format!("write DEX failed: {e}")))?;

    let dex_path_jstring = env
        .new_string(&dex_path)
        .map_err(|e| PermissionError::Unknown(format!("new_string failed: {e}")))?;

    let parent_loader = env
        .call_method(activity, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .and_then(|v| v.l())
        .map_err(|e| PermissionError::Unknown(format!("getClassLoader failed: {e}")))?;

    let dex_class_loader_class = env
        .find_class("dalvik/system/DexClassLoader")
        .map_err(|e| PermissionError::Unknown(format!("find DexClassLoader: {e}")))?;

    let class_loader = env
        .new_object(
            dex_class_loader_class,
            "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;Ljava/lang/ClassLoader;)V",
            &[
                JValue::Object(&dex_path_jstring),
                JValue::Object(&cache_path),
                JValue::Object(&JObject::null()),
                JValue::Object(&parent_loader),
            ],
        )
        .map_err(|e| {
            log::error!("new DexClassLoader failed: {e}");
            PermissionError::Unknown(format!("new DexClassLoader: {e}"))
        })?;

    let global_ref = env
        .new_global_ref(class_loader)
        .map_err(|e| PermissionError::Unknown(format!("new_global_ref: {e}")))?;

    let _ = CLASS_LOADER.set(global_ref);
    Ok(())
}

fn load_helper_class<'local>(
    env: &mut JNIEnv<'local>,
) -> Result<JClass<'local>, PermissionError> {
    let class_loader = CLASS_LOADER
        .get()
        .ok_or_else(|| PermissionError::Unknown("Class loader not initialized".into()))?;

    let helper_class_name = env
        .new_string(HELPER_CLASS)
        .map_err(|e| PermissionError::Unknown(format!("new_string: {e}")))?;

    let helper_class = env
        .call_method(
            class_loader.as_obj(),
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&helper_class_name)],
        )
        .and_then(|v| v.l())
        .map_err(|e| PermissionError::Unknown(format!("loadClass: {e}")))?;

    Ok(helper_class.into())
}

/// Check a permission using the Activity context.
///
/// Returns `Unknown` on any JNI failure rather than surfacing an error.
pub fn check_with_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    permission: Permission,
) -> PermissionStatus {
    let code = (|| -> Result<jint, PermissionError> {
        init_with_activity(env, activity)?;
        let helper_class = load_helper_class(env)?;
        env.call_static_method(
            helper_class,
            "checkPermission",
            "(Landroid/app/Activity;I)I",
            &[
                JValue::Object(activity),
                JValue::Int(domain_to_jint(permission)),
            ],
        )
        .and_then(|v| v.i())
        .map_err(|e| PermissionError::Unknown(format!("checkPermission: {e}")))
    })();

    match code {
        Ok(code) => PermissionStatus::from_raw(code),
        Err(e) => {
            log::warn!("permission check failed, reporting unknown: {e}");
            PermissionStatus::Unknown
        }
    }
}

/// Trigger the runtime-permission dialog using the Activity context.
///
/// Hands the request to `Activity.requestPermissions` and returns without
/// waiting for the user. The outcome is observable through a later check.
///
/// # Errors
/// Returns an error if the helper class cannot be loaded or invoked.
pub fn request_with_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    permission: Permission,
) -> Result<(), PermissionError> {
    init_with_activity(env, activity)?;
    let helper_class = load_helper_class(env)?;
    env.call_static_method(
        helper_class,
        "requestPermission",
        "(Landroid/app/Activity;I)V",
        &[
            JValue::Object(activity),
            JValue::Int(domain_to_jint(permission)),
        ],
    )
    .map_err(|e| PermissionError::Unknown(format!("requestPermission: {e}")))?;
    Ok(())
}

// Wrappers for the context-free public API
pub(crate) fn check(permission: Permission) -> PermissionStatus {
    // Without a JNI context we cannot reach the Android runtime;
    // the application must call check_with_activity directly
    let _ = permission;
    PermissionStatus::Unknown
}

pub(crate) fn request(permission: Permission) -> Result<(), PermissionError> {
    let _ = permission;
    Err(PermissionError::Unknown(
        "Android: use request_with_activity() with an Activity context".into(),
    ))
}
