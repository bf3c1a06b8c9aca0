use crate::handlers::result_adapter::ResultAdapter;
use crate::{AuthRequest, BridgeError, HandlerContext, Responder, log_handler_entry};

use ab_core::{AuthCredential, ProfileChange};

/// Run one parsed request against the provider and deliver its response.
///
/// Each request issues exactly one provider operation (or registry
/// operation) and completes `responder` exactly once.
pub async fn dispatch(request: AuthRequest, ctx: HandlerContext, responder: Responder) {
    log_handler_entry!(ctx.request_ctx, request.method_name());

    let adapter = ResultAdapter::new(&ctx, responder);
    let provider = ctx.provider.as_ref();

    match request {
        // Session
        AuthRequest::CurrentUser => adapter.complete(ctx.registry.current_user_once()).await,
        AuthRequest::SignInAnonymously => adapter.complete(provider.sign_in_anonymously()).await,
        AuthRequest::CreateUserWithEmailAndPassword { email, password } => {
            adapter
                .complete(provider.create_user_with_email_and_password(&email, &password))
                .await
        }
        AuthRequest::SignInWithEmailAndPassword { email, password } => {
            adapter
                .complete(provider.sign_in_with_email_and_password(&email, &password))
                .await
        }
        AuthRequest::CreateUserWithPhoneAndPassword { phone, password } => {
            adapter
                .complete(provider.create_user_with_phone_and_password(&phone, &password))
                .await
        }
        AuthRequest::SignInWithPhoneAndPassword { phone, password } => {
            adapter
                .complete(provider.sign_in_with_phone_and_password(&phone, &password))
                .await
        }
        AuthRequest::LinkWithEmailAndPassword { email, password } => {
            adapter
                .complete(provider.link_with_credential(AuthCredential::email(email, password)))
                .await
        }
        AuthRequest::SignOut => {
            adapter
                .complete(async {
                    provider.sign_out().await;
                    Ok::<(), BridgeError>(())
                })
                .await
        }

        // Profile and credentials
        AuthRequest::UpdateProfile {
            display_name,
            photo_url,
        } => {
            let change = ProfileChange::new()
                .display_name(display_name)
                .photo_url(photo_url);
            adapter.complete(provider.update_profile(change)).await
        }
        AuthRequest::UpdatePassword { password } => {
            adapter.complete(provider.update_password(&password)).await
        }
        AuthRequest::UpdateEmail { email } => adapter.complete(provider.update_email(&email)).await,
        AuthRequest::UpdatePhone { phone } => adapter.complete(provider.update_phone(&phone)).await,
        AuthRequest::ReauthenticateEmail { email, password } => {
            adapter
                .complete(provider.reauthenticate(AuthCredential::email(email, password)))
                .await
        }
        AuthRequest::ReauthenticatePhone { phone, password } => {
            adapter
                .complete(provider.reauthenticate(AuthCredential::phone(phone, password)))
                .await
        }
        AuthRequest::Delete => adapter.complete(provider.delete_user()).await,

        // Verification and reset
        AuthRequest::SendEmailVerification => {
            adapter.complete(provider.send_email_verification()).await
        }
        AuthRequest::SendPhoneVerification => {
            adapter.complete(provider.send_phone_verification()).await
        }
        AuthRequest::VerifyPhoneSmsCode { sms_code } => {
            adapter.complete(provider.verify_phone(&sms_code)).await
        }
        AuthRequest::SendPasswordResetEmail { email } => {
            adapter
                .complete(provider.send_password_reset_email(&email))
                .await
        }
        AuthRequest::SendPasswordResetSms { phone } => {
            adapter.complete(provider.send_password_reset_sms(&phone)).await
        }
        AuthRequest::ConfirmPasswordResetSms {
            phone,
            sms_code,
            new_password,
        } => {
            adapter
                .complete(provider.confirm_password_reset_sms(&phone, &sms_code, &new_password))
                .await
        }

        // Tokens
        AuthRequest::GetIdToken { refresh } => adapter.complete(provider.get_token(refresh)).await,

        // Subscriptions
        AuthRequest::StartListeningAuthState => adapter.complete(ctx.registry.start()).await,
        AuthRequest::StopListeningAuthState { handle } => {
            adapter.complete(ctx.registry.stop(handle)).await
        }
    }
}
